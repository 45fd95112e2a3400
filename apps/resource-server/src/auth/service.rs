//! The authorization-service boundary.
//!
//! Everything OAuth/OIDC-specific (token introspection, scope checks,
//! userinfo signing) happens behind [`AuthorizationService`]. Handlers only
//! see either token metadata or a finished response to forward.

use async_trait::async_trait;

use crate::claims::ClaimsProvider;
use crate::http::relay::RelayedResponse;

/// What the authorization service knows about a valid access token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTokenInfo {
    pub subject: Option<String>,
    pub scopes: Vec<String>,
    pub client_id: Option<i64>,
    /// Expiry, epoch milliseconds.
    pub expires_at: Option<i64>,
}

impl AccessTokenInfo {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

/// A failed validation, carrying the response the client must receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRejection(RelayedResponse);

impl TokenRejection {
    pub fn new(response: RelayedResponse) -> Self {
        Self(response)
    }

    pub fn response(&self) -> &RelayedResponse {
        &self.0
    }

    pub fn into_response(self) -> RelayedResponse {
        self.0
    }
}

#[async_trait]
pub trait AuthorizationService: Send + Sync {
    /// Introspect `token`, optionally requiring scopes and a subject.
    ///
    /// `token` is `None` when the request carried no token at all; the
    /// implementation decides what that rejection looks like.
    async fn validate_access_token(
        &self,
        token: Option<&str>,
        required_scopes: &[&str],
        required_subject: Option<&str>,
    ) -> Result<AccessTokenInfo, TokenRejection>;

    /// Run a complete UserInfo request, pulling claim values from `claims`.
    ///
    /// The returned response (JSON, JWT, or an error) is relayed as-is.
    async fn handle_userinfo(
        &self,
        token: Option<&str>,
        claims: &dyn ClaimsProvider,
    ) -> RelayedResponse;
}
