#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod authlete;
pub mod claims;
pub mod config;
pub mod countries;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod trace_ctx;
pub mod users;

// Re-exports for public API
pub use auth::service::{AccessTokenInfo, AuthorizationService, TokenRejection};
pub use authlete::AuthleteClient;
pub use claims::{ClaimsProvider, DirectoryClaimsProvider};
pub use config::{AuthleteConfig, ServerConfig};
pub use countries::CountryRecord;
pub use error::AppError;
pub use extractors::access_token::AccessToken;
pub use http::relay::RelayedResponse;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use middleware::trace_span::TraceSpan;
pub use state::app_state::AppState;
pub use state::builder::build_state;
pub use users::{UserDirectory, UserRecord};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
