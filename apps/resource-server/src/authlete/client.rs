use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use super::dto::{
    IntrospectionRequest, IntrospectionResponse, IssueAction, TokenAction, UserInfoIssueRequest,
    UserInfoIssueResponse, UserInfoRequest, UserInfoResponse, INTROSPECTION_PATH,
    USERINFO_ISSUE_PATH, USERINFO_PATH,
};
use super::responses;
use crate::auth::service::{AccessTokenInfo, AuthorizationService, TokenRejection};
use crate::claims::ClaimsProvider;
use crate::config::AuthleteConfig;
use crate::error::AppError;
use crate::http::relay::RelayedResponse;
use crate::http::response_builder::APPLICATION_JSON_UTF8;
use crate::trace_ctx;

#[derive(Debug, Error)]
enum AuthleteCallError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered HTTP {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected action {action} from {endpoint}")]
    UnexpectedAction {
        endpoint: &'static str,
        action: String,
    },
}

/// Authlete API client.
///
/// Credentials go out as HTTP Basic on every call. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Clone)]
pub struct AuthleteClient {
    http: Client,
    config: AuthleteConfig,
}

impl AuthleteClient {
    pub fn new(config: AuthleteConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build Authlete HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    async fn call<Req, Resp>(
        &self,
        endpoint: &'static str,
        body: &Req,
    ) -> Result<Resp, AuthleteCallError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.endpoint(endpoint))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(body)
            .send()
            .await
            .map_err(|source| AuthleteCallError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthleteCallError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| AuthleteCallError::Transport { endpoint, source })?;

        serde_json::from_slice(&bytes)
            .map_err(|source| AuthleteCallError::Decode { endpoint, source })
    }

    fn failure(&self, err: AuthleteCallError, description: &str) -> RelayedResponse {
        error!(
            trace_id = %trace_ctx::trace_id(),
            error = %err,
            "Authlete API call failed"
        );
        responses::server_error(description)
    }
}

fn non_empty(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

#[async_trait]
impl AuthorizationService for AuthleteClient {
    async fn validate_access_token(
        &self,
        token: Option<&str>,
        required_scopes: &[&str],
        required_subject: Option<&str>,
    ) -> Result<AccessTokenInfo, TokenRejection> {
        let Some(token) = non_empty(token) else {
            return Err(TokenRejection::new(responses::missing_access_token()));
        };

        let request = IntrospectionRequest {
            token,
            scopes: (!required_scopes.is_empty()).then_some(required_scopes),
            subject: required_subject,
        };

        let response: IntrospectionResponse = self
            .call(INTROSPECTION_PATH, &request)
            .await
            .map_err(|e| TokenRejection::new(self.failure(e, "Introspection failed.")))?;

        debug!(
            action = ?response.action,
            result = response.result_message.as_deref().unwrap_or(""),
            "Introspection finished"
        );

        match response.action {
            TokenAction::Ok => Ok(AccessTokenInfo {
                subject: response.subject,
                scopes: response.scopes.unwrap_or_default(),
                client_id: response.client_id,
                expires_at: response.expires_at,
            }),
            action => match action.error_status() {
                Some(status) => Err(TokenRejection::new(responses::bearer_error(
                    status,
                    response.response_content.as_deref(),
                ))),
                None => Err(TokenRejection::new(self.failure(
                    AuthleteCallError::UnexpectedAction {
                        endpoint: INTROSPECTION_PATH,
                        action: format!("{action:?}"),
                    },
                    "Introspection failed.",
                ))),
            },
        }
    }

    async fn handle_userinfo(
        &self,
        token: Option<&str>,
        claims: &dyn ClaimsProvider,
    ) -> RelayedResponse {
        let Some(token) = non_empty(token) else {
            return responses::missing_access_token();
        };

        let userinfo: UserInfoResponse = match self
            .call(USERINFO_PATH, &UserInfoRequest { token })
            .await
        {
            Ok(response) => response,
            Err(e) => return self.failure(e, "UserInfo request failed."),
        };

        match userinfo.action {
            TokenAction::Ok => {}
            action => {
                return match action.error_status() {
                    Some(status) => {
                        responses::bearer_error(status, userinfo.response_content.as_deref())
                    }
                    None => self.failure(
                        AuthleteCallError::UnexpectedAction {
                            endpoint: USERINFO_PATH,
                            action: format!("{action:?}"),
                        },
                        "UserInfo request failed.",
                    ),
                };
            }
        }

        let requested = userinfo.claims.unwrap_or_default();
        let values = claims.collect_claims(userinfo.subject.as_deref(), &requested);
        let issue_request = UserInfoIssueRequest {
            token,
            claims: (!values.is_empty()).then(|| Value::Object(values).to_string()),
        };

        let issued: UserInfoIssueResponse =
            match self.call(USERINFO_ISSUE_PATH, &issue_request).await {
                Ok(response) => response,
                Err(e) => return self.failure(e, "UserInfo issue failed."),
            };

        let content = issued.response_content;
        match issued.action {
            IssueAction::Json => responses::ok(content.unwrap_or_default(), APPLICATION_JSON_UTF8),
            IssueAction::Jwt => {
                responses::ok(content.unwrap_or_default(), responses::APPLICATION_JWT)
            }
            action => match action.error_status() {
                Some(status) => responses::bearer_error(status, content.as_deref()),
                None => self.failure(
                    AuthleteCallError::UnexpectedAction {
                        endpoint: USERINFO_ISSUE_PATH,
                        action: format!("{action:?}"),
                    },
                    "UserInfo issue failed.",
                ),
            },
        }
    }
}
