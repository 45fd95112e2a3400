use std::fmt;

use actix_web::dev::Payload;
use actix_web::http::{header, Method};
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture};
use serde::Deserialize;
use tracing::debug;

use crate::auth::bearer::select_access_token;
use crate::AppError;

/// The `access_token` request parameter (query string or form body).
#[derive(Debug, Default, Deserialize)]
pub struct AccessTokenParams {
    pub access_token: Option<String>,
}

/// The access token presented with a request, if any.
///
/// Never rejects: a missing or malformed credential is `token == None` and
/// left to the authorization service to answer. A request that carries an
/// `Authorization` header is judged by that header alone. Otherwise the
/// `access_token` parameter is read from the form body for POST and from
/// the query string for everything else. Parameters that fail to decode,
/// including a repeated `access_token`, count as no token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    pub token: Option<String>,
}

impl AccessToken {
    pub fn as_deref(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl FromRequest for AccessToken {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if let Some(value) = req.headers().get(header::AUTHORIZATION) {
            let token = select_access_token(Some(value.to_str().unwrap_or("")), None);
            return Box::pin(ready(Ok(AccessToken { token })));
        }

        if req.method() == Method::POST {
            let form = web::Form::<AccessTokenParams>::from_request(req, payload);
            return Box::pin(async move {
                let params = form.await.map(web::Form::into_inner).unwrap_or_else(|err| {
                    debug!(reason = %err, "discarding undecodable form parameters");
                    AccessTokenParams::default()
                });
                Ok(AccessToken {
                    token: select_access_token(None, params.access_token),
                })
            });
        }

        let params = web::Query::<AccessTokenParams>::from_query(req.query_string())
            .map(web::Query::into_inner)
            .unwrap_or_else(|err| {
                debug!(reason = %err, "discarding undecodable query parameters");
                AccessTokenParams::default()
            });
        Box::pin(ready(Ok(AccessToken {
            token: select_access_token(None, params.access_token),
        })))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    async fn extract(req: TestRequest) -> AccessToken {
        let (req, mut payload) = req.to_http_parts();
        AccessToken::from_request(&req, &mut payload).await.unwrap()
    }

    #[actix_web::test]
    async fn reads_bearer_header() {
        let token = extract(
            TestRequest::get()
                .uri("/?access_token=ignored")
                .insert_header((header::AUTHORIZATION, "Bearer abc")),
        )
        .await;
        assert_eq!(token.as_deref(), Some("abc"));
    }

    #[actix_web::test]
    async fn malformed_header_hides_parameter() {
        let token = extract(
            TestRequest::get()
                .uri("/?access_token=from-query")
                .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz")),
        )
        .await;
        assert_eq!(token.token, None);
    }

    #[actix_web::test]
    async fn reads_query_parameter_on_get() {
        let token = extract(TestRequest::get().uri("/?access_token=q%20tok")).await;
        assert_eq!(token.as_deref(), Some("q tok"));
    }

    #[actix_web::test]
    async fn reads_form_parameter_on_post() {
        let token = extract(
            TestRequest::post()
                .uri("/?access_token=from-query")
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload("access_token=from-form"),
        )
        .await;
        assert_eq!(token.as_deref(), Some("from-form"));
    }

    #[actix_web::test]
    async fn repeated_query_parameter_is_no_token() {
        let token = extract(TestRequest::get().uri("/?access_token=a&access_token=b")).await;
        assert_eq!(token, AccessToken::default());
    }

    #[actix_web::test]
    async fn repeated_form_parameter_is_no_token() {
        let token = extract(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
                .set_payload("access_token=a&access_token=b"),
        )
        .await;
        assert_eq!(token, AccessToken::default());
    }

    #[actix_web::test]
    async fn unreadable_form_is_no_token() {
        let token = extract(
            TestRequest::post()
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .set_payload("{\"access_token\":\"x\"}"),
        )
        .await;
        assert_eq!(token, AccessToken::default());
    }

    #[test]
    fn debug_hides_token_value() {
        let token = AccessToken {
            token: Some("secret-token".into()),
        };
        assert!(!format!("{token:?}").contains("secret-token"));
    }
}
