//! [`AuthorizationService`](crate::auth::AuthorizationService) backed by the
//! Authlete API.

mod client;
pub mod dto;
pub mod responses;

pub use client::AuthleteClient;
