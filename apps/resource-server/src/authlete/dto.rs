//! Request and response bodies of the Authlete endpoints in use.

use serde::{Deserialize, Serialize};

pub const INTROSPECTION_PATH: &str = "/api/auth/introspection";
pub const USERINFO_PATH: &str = "/api/auth/userinfo";
pub const USERINFO_ISSUE_PATH: &str = "/api/auth/userinfo/issue";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionRequest<'a> {
    pub token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<&'a [&'a str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<&'a str>,
}

/// Next step for the resource server, as decided by introspection or
/// userinfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenAction {
    InternalServerError,
    BadRequest,
    Unauthorized,
    Forbidden,
    Ok,
    #[serde(other)]
    Unknown,
}

impl TokenAction {
    /// HTTP status for actions that end the request with an error.
    pub fn error_status(self) -> Option<u16> {
        match self {
            Self::InternalServerError => Some(500),
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Ok | Self::Unknown => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntrospectionResponse {
    pub action: TokenAction,
    #[serde(default)]
    pub response_content: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
    #[serde(default)]
    pub client_id: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub result_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserInfoRequest<'a> {
    pub token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub action: TokenAction,
    #[serde(default)]
    pub response_content: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Claim names the client may receive, possibly suffixed `#languageTag`.
    #[serde(default)]
    pub claims: Option<Vec<String>>,
    #[serde(default)]
    pub result_message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoIssueRequest<'a> {
    pub token: &'a str,
    /// Claim values as a serialized JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueAction {
    InternalServerError,
    BadRequest,
    Unauthorized,
    Forbidden,
    Json,
    Jwt,
    #[serde(other)]
    Unknown,
}

impl IssueAction {
    pub fn error_status(self) -> Option<u16> {
        match self {
            Self::InternalServerError => Some(500),
            Self::BadRequest => Some(400),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Json | Self::Jwt | Self::Unknown => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoIssueResponse {
    pub action: IssueAction,
    #[serde(default)]
    pub response_content: Option<String>,
    #[serde(default)]
    pub result_message: Option<String>,
}
