pub mod bearer;
pub mod service;

pub use bearer::{parse_bearer, select_access_token};
pub use service::{AccessTokenInfo, AuthorizationService, TokenRejection};
