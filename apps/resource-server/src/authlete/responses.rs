//! Responses the Authlete-backed service hands to the handlers.
//!
//! Every response here carries `Cache-Control: no-store` and
//! `Pragma: no-cache`.

use crate::http::relay::RelayedResponse;

pub const APPLICATION_JWT: &str = "application/jwt";

const MISSING_TOKEN_CHALLENGE: &str = "Bearer error=\"invalid_token\",error_description=\"An access token must be sent as a Bearer Token. See RFC 6750 for details.\"";

fn no_cache(response: RelayedResponse) -> RelayedResponse {
    response
        .with_header("Cache-Control", "no-store")
        .with_header("Pragma", "no-cache")
}

/// Error response with the given `WWW-Authenticate` challenge and no body.
pub fn bearer_error(status: u16, challenge: Option<&str>) -> RelayedResponse {
    let response = RelayedResponse::new(status);
    let response = match challenge {
        Some(challenge) => response.with_header("WWW-Authenticate", challenge),
        None => response,
    };
    no_cache(response)
}

pub fn missing_access_token() -> RelayedResponse {
    bearer_error(401, Some(MISSING_TOKEN_CHALLENGE))
}

/// 500 for failures talking to the authorization service itself.
pub fn server_error(description: &str) -> RelayedResponse {
    let challenge = format!(
        "Bearer error=\"server_error\",error_description=\"{}\"",
        description.replace('"', "'")
    );
    bearer_error(500, Some(&challenge))
}

pub fn ok(content: String, content_type: &str) -> RelayedResponse {
    no_cache(RelayedResponse::new(200).with_header("Content-Type", content_type)).with_body(content)
}
