//! `AuthleteClient` against a mocked Authlete API.

mod common;

use std::time::Duration;

use resource_server::authlete::responses;
use resource_server::users::UserDirectory;
use resource_server::{AuthleteClient, AuthleteConfig, AuthorizationService, DirectoryClaimsProvider};
use serde_json::json;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const INTROSPECTION: &str = "/api/auth/introspection";
const USERINFO: &str = "/api/auth/userinfo";
const USERINFO_ISSUE: &str = "/api/auth/userinfo/issue";

fn client_for(server: &MockServer) -> AuthleteClient {
    let config = AuthleteConfig::new(server.uri(), "service-key", "service-secret")
        .with_timeout(Duration::from_secs(2));
    AuthleteClient::new(config).expect("client should build")
}

async fn mount_json(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn valid_token_yields_token_info() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INTROSPECTION))
        .and(basic_auth("service-key", "service-secret"))
        .and(body_json(json!({"token": "good"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": "OK",
            "resultCode": "A056001",
            "resultMessage": "[A056001] The access token is valid.",
            "subject": "1001",
            "scopes": ["openid", "email"],
            "clientId": 57297408867i64,
            "expiresAt": 1893456000000i64
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server)
        .validate_access_token(Some("good"), &[], None)
        .await
        .expect("token should be valid");

    assert_eq!(info.subject.as_deref(), Some("1001"));
    assert!(info.has_scope("email"));
    assert_eq!(info.client_id, Some(57297408867));
    assert_eq!(info.expires_at, Some(1893456000000));
}

#[tokio::test]
async fn required_scopes_and_subject_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INTROSPECTION))
        .and(body_json(json!({"token": "t", "scopes": ["openid"], "subject": "1001"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"action": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server)
        .validate_access_token(Some("t"), &["openid"], Some("1001"))
        .await
        .unwrap();
    assert_eq!(info.subject, None);
    assert!(info.scopes.is_empty());
}

#[tokio::test]
async fn error_actions_map_to_statuses_with_challenge() {
    for (action, status) in [
        ("BAD_REQUEST", 400),
        ("UNAUTHORIZED", 401),
        ("FORBIDDEN", 403),
        ("INTERNAL_SERVER_ERROR", 500),
    ] {
        let server = MockServer::start().await;
        let challenge = format!("Bearer error=\"{}\"", action.to_lowercase());
        mount_json(
            &server,
            INTROSPECTION,
            json!({"action": action, "responseContent": challenge}),
        )
        .await;

        let rejection = client_for(&server)
            .validate_access_token(Some("t"), &[], None)
            .await
            .unwrap_err();
        let response = rejection.response();

        assert_eq!(response.status(), status, "{action}");
        assert_eq!(
            response.headers(),
            &[
                ("WWW-Authenticate".to_string(), challenge.clone()),
                ("Cache-Control".to_string(), "no-store".to_string()),
                ("Pragma".to_string(), "no-cache".to_string()),
            ]
        );
        assert!(response.body().is_empty());
    }
}

#[tokio::test]
async fn missing_token_never_calls_the_api() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let rejection = client.validate_access_token(None, &[], None).await.unwrap_err();
    assert_eq!(rejection.response(), &responses::missing_access_token());

    let directory = UserDirectory::with_dummy_users();
    let response = client
        .handle_userinfo(Some(""), &DirectoryClaimsProvider::new(&directory))
        .await;
    assert_eq!(response, responses::missing_access_token());

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn api_failures_become_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(INTROSPECTION))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(USERINFO))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let rejection = client.validate_access_token(Some("t"), &[], None).await.unwrap_err();
    assert_eq!(rejection.response().status(), 500);
    assert!(rejection.response().header("www-authenticate")
        .unwrap()
        .starts_with("Bearer error=\"server_error\""));
    assert_eq!(rejection.response().header("cache-control"), Some("no-store"));

    let directory = UserDirectory::with_dummy_users();
    let response = client
        .handle_userinfo(Some("t"), &DirectoryClaimsProvider::new(&directory))
        .await;
    assert_eq!(response.status(), 500);
    assert_eq!(response.header("pragma"), Some("no-cache"));
}

#[tokio::test]
async fn unknown_action_is_a_server_error() {
    let server = MockServer::start().await;
    mount_json(&server, INTROSPECTION, json!({"action": "SOMETHING_NEW"})).await;

    let rejection = client_for(&server)
        .validate_access_token(Some("t"), &[], None)
        .await
        .unwrap_err();
    assert_eq!(rejection.response().status(), 500);
}

#[tokio::test]
async fn unreachable_api_is_a_server_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let rejection = client.validate_access_token(Some("t"), &[], None).await.unwrap_err();
    assert_eq!(rejection.response().status(), 500);
}

#[tokio::test]
async fn userinfo_issues_json_with_collected_claims() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(USERINFO))
        .and(body_json(json!({"token": "oidc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": "OK",
            "subject": "1001",
            "claims": ["name#ja", "email", "birthdate"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(USERINFO_ISSUE))
        .and(basic_auth("service-key", "service-secret"))
        .and(body_json(json!({
            "token": "oidc",
            "claims": "{\"email\":\"john@example.com\",\"name#ja\":\"John Smith\"}"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": "JSON",
            "responseContent": "{\"sub\":\"1001\",\"name#ja\":\"John Smith\"}"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = UserDirectory::with_dummy_users();
    let response = client_for(&server)
        .handle_userinfo(Some("oidc"), &DirectoryClaimsProvider::new(&directory))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("content-type"),
        Some("application/json;charset=UTF-8")
    );
    assert_eq!(response.header("cache-control"), Some("no-store"));
    assert_eq!(
        response.body().as_ref(),
        b"{\"sub\":\"1001\",\"name#ja\":\"John Smith\"}"
    );
}

#[tokio::test]
async fn userinfo_without_claim_values_omits_claims() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        USERINFO,
        json!({"action": "OK", "subject": "unknown-user", "claims": ["name"]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(USERINFO_ISSUE))
        .and(body_json(json!({"token": "oidc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "action": "JWT",
            "responseContent": "header.payload.signature"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = UserDirectory::with_dummy_users();
    let response = client_for(&server)
        .handle_userinfo(Some("oidc"), &DirectoryClaimsProvider::new(&directory))
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("content-type"), Some("application/jwt"));
    assert_eq!(response.body().as_ref(), b"header.payload.signature");
}

#[tokio::test]
async fn userinfo_rejection_skips_issue() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        USERINFO,
        json!({"action": "FORBIDDEN", "responseContent": "Bearer error=\"insufficient_scope\""}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(USERINFO_ISSUE))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let directory = UserDirectory::with_dummy_users();
    let response = client_for(&server)
        .handle_userinfo(Some("oidc"), &DirectoryClaimsProvider::new(&directory))
        .await;

    assert_eq!(response.status(), 403);
    assert_eq!(
        response.header("www-authenticate"),
        Some("Bearer error=\"insufficient_scope\"")
    );
}

#[tokio::test]
async fn issue_error_action_is_mapped() {
    let server = MockServer::start().await;
    mount_json(&server, USERINFO, json!({"action": "OK", "subject": "1001", "claims": []})).await;
    mount_json(
        &server,
        USERINFO_ISSUE,
        json!({"action": "UNAUTHORIZED", "responseContent": "Bearer error=\"invalid_token\""}),
    )
    .await;

    let directory = UserDirectory::with_dummy_users();
    let response = client_for(&server)
        .handle_userinfo(Some("oidc"), &DirectoryClaimsProvider::new(&directory))
        .await;

    assert_eq!(response.status(), 401);
    assert_eq!(
        response.header("www-authenticate"),
        Some("Bearer error=\"invalid_token\"")
    );
}
