//! Responses produced by the authorization service and forwarded as-is.

use std::fmt;

use bytes::Bytes;

/// A complete HTTP response formed outside this server.
///
/// Status, headers and body are kept as received. Headers are an ordered
/// list of `(name, value)` pairs; repeated values under one name reach the
/// client in order, the order across names does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl RelayedResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header; earlier values under the same name are kept.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl fmt::Display for RelayedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {} ({} headers, {} body bytes)", self.status, self.headers.len(), self.body.len())
    }
}

/// Left in the extensions of a response built from a [`RelayedResponse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayOutcome {
    /// `error` parameter of the relayed Bearer challenge, if any.
    pub auth_error: Option<String>,
}

impl RelayOutcome {
    pub fn of(response: &RelayedResponse) -> Self {
        Self {
            auth_error: response
                .header("WWW-Authenticate")
                .and_then(bearer_error_code)
                .map(str::to_owned),
        }
    }
}

/// Value of the `error="..."` parameter in a `WWW-Authenticate` challenge.
pub fn bearer_error_code(challenge: &str) -> Option<&str> {
    const KEY: &str = "error=\"";

    let mut rest = challenge;
    while let Some(idx) = rest.find(KEY) {
        let at_boundary = rest[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| c == ' ' || c == ',');
        let tail = &rest[idx + KEY.len()..];
        if at_boundary {
            return tail.find('"').map(|end| &tail[..end]);
        }
        rest = tail;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_error_code_in_challenge() {
        let challenge = r#"Bearer error="invalid_token", error_description="expired""#;
        assert_eq!(bearer_error_code(challenge), Some("invalid_token"));
    }

    #[test]
    fn error_description_alone_is_not_an_error_code() {
        let challenge = r#"Bearer realm="api", error_description="x", scope_error="y""#;
        assert_eq!(bearer_error_code(challenge), None);
        assert_eq!(bearer_error_code("Bearer"), None);
    }

    #[test]
    fn outcome_reads_challenge_header() {
        let rejected = RelayedResponse::new(401)
            .with_header("WWW-Authenticate", r#"Bearer error="invalid_request""#);
        assert_eq!(
            RelayOutcome::of(&rejected).auth_error.as_deref(),
            Some("invalid_request")
        );
        assert_eq!(RelayOutcome::of(&RelayedResponse::new(200)).auth_error, None);
    }

    #[test]
    fn keeps_repeated_headers_in_order() {
        let resp = RelayedResponse::new(401)
            .with_header("WWW-Authenticate", "Bearer error=\"invalid_token\"")
            .with_header("Link", "<a>")
            .with_header("Link", "<b>");

        let links: Vec<&str> = resp
            .headers()
            .iter()
            .filter(|(n, _)| n == "Link")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(links, vec!["<a>", "<b>"]);
        assert_eq!(resp.header("www-authenticate"), Some("Bearer error=\"invalid_token\""));
        assert_eq!(resp.header("pragma"), None);
    }

    #[test]
    fn display_summarizes_without_body() {
        let resp = RelayedResponse::new(403).with_body("secret-ish");
        assert_eq!(resp.to_string(), "HTTP 403 (0 headers, 10 body bytes)");
    }
}
