#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::{Arc, Mutex};

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use async_trait::async_trait;
use resource_server::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use resource_server::state::build_state;
use resource_server::{
    routes, AccessTokenInfo, AuthorizationService, ClaimsProvider, RelayedResponse,
    TokenRejection,
};
use serde_json::Value;

pub mod proptest_prelude;

#[ctor::ctor]
fn init_logging() {
    test_support::logging::init();
}

pub const CHALLENGE: &str = "Bearer error=\"invalid_token\",error_description=\"The access token has expired.\"";

/// A 401 as the authorization service would phrase it, with a repeated header.
pub fn canned_rejection() -> RelayedResponse {
    RelayedResponse::new(401)
        .with_header("WWW-Authenticate", CHALLENGE)
        .with_header("Cache-Control", "no-store")
        .with_header("Pragma", "no-cache")
        .with_header("Link", "<https://as.example.com/a>; rel=\"a\"")
        .with_header("Link", "<https://as.example.com/b>; rel=\"b\"")
        .with_body("{\"error\":\"invalid_token\"}")
}

/// In-process stand-in for the authorization service.
///
/// Records every token it is asked about. Accepts everything unless built
/// with a rejection; UserInfo answers with the claims the directory supplies
/// for `subject`.
pub struct FakeAuthorizationService {
    rejection: Option<RelayedResponse>,
    subject: String,
    requested_claims: Vec<String>,
    jwt: Option<String>,
    seen: Mutex<Vec<Option<String>>>,
}

impl FakeAuthorizationService {
    pub fn accepting() -> Self {
        Self {
            rejection: None,
            subject: "1001".to_string(),
            requested_claims: vec!["name".into(), "email".into()],
            jwt: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(response: RelayedResponse) -> Self {
        Self {
            rejection: Some(response),
            ..Self::accepting()
        }
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = subject.to_string();
        self
    }

    pub fn with_requested_claims(mut self, claims: &[&str]) -> Self {
        self.requested_claims = claims.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn issuing_jwt(mut self, jwt: &str) -> Self {
        self.jwt = Some(jwt.to_string());
        self
    }

    /// Tokens received so far, in call order.
    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, token: Option<&str>) {
        self.seen.lock().unwrap().push(token.map(str::to_owned));
    }
}

#[async_trait]
impl AuthorizationService for FakeAuthorizationService {
    async fn validate_access_token(
        &self,
        token: Option<&str>,
        _required_scopes: &[&str],
        _required_subject: Option<&str>,
    ) -> Result<AccessTokenInfo, TokenRejection> {
        self.record(token);
        match &self.rejection {
            Some(response) => Err(TokenRejection::new(response.clone())),
            None => Ok(AccessTokenInfo {
                subject: Some(self.subject.clone()),
                scopes: vec!["openid".into()],
                ..Default::default()
            }),
        }
    }

    async fn handle_userinfo(
        &self,
        token: Option<&str>,
        claims: &dyn ClaimsProvider,
    ) -> RelayedResponse {
        self.record(token);
        if let Some(response) = &self.rejection {
            return response.clone();
        }
        if let Some(jwt) = &self.jwt {
            return RelayedResponse::new(200)
                .with_header("Content-Type", "application/jwt")
                .with_header("Cache-Control", "no-store")
                .with_header("Pragma", "no-cache")
                .with_body(jwt.clone());
        }

        let mut values = claims.collect_claims(Some(self.subject.as_str()), &self.requested_claims);
        values.insert("sub".into(), Value::String(self.subject.clone()));
        RelayedResponse::new(200)
            .with_header("Content-Type", "application/json;charset=UTF-8")
            .with_header("Cache-Control", "no-store")
            .with_header("Pragma", "no-cache")
            .with_body(Value::Object(values).to_string())
    }
}

/// The production app (middleware and routes) over `service`.
pub async fn test_app(
    service: Arc<FakeAuthorizationService>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let state = build_state()
        .with_authorization(service)
        .build()
        .expect("state should build");

    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
