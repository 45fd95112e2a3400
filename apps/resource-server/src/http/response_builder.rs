//! Accumulates status, headers and body before producing an `HttpResponse`.
//!
//! Endpoints either build their own JSON payload on top of the defaults
//! (200, no headers, empty body) or import a [`RelayedResponse`] wholesale.
//! Nothing here computes a status on its own.

use actix_web::http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use bytes::Bytes;
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::http::relay::{RelayOutcome, RelayedResponse};

pub const APPLICATION_JSON_UTF8: &str = "application/json;charset=UTF-8";

#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    status: u16,
    headers: Vec<(String, String)>,
    body: Bytes,
    relayed: Option<RelayOutcome>,
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self {
            status: StatusCode::OK.as_u16(),
            headers: Vec::new(),
            body: Bytes::new(),
            relayed: None,
        }
    }
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header value. Empty names are ignored.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if name.is_empty() {
            return self;
        }
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn content_type(self, value: &str) -> Self {
        self.header(CONTENT_TYPE.as_str(), value)
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Serialize `content` as the body. The content type is left to the caller.
    pub fn json<T: Serialize>(self, content: &T) -> Result<Self, AppError> {
        let body = serde_json::to_vec(content).map_err(|e| {
            AppError::internal(
                ErrorCode::InternalError,
                format!("failed to serialize response body: {e}"),
            )
        })?;
        Ok(self.body(body))
    }

    /// Replace status, headers and body with those of `response`.
    pub fn relay(mut self, response: &RelayedResponse) -> Self {
        self.status = response.status();
        self.headers = response
            .headers()
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .cloned()
            .collect();
        self.body = response.body().clone();
        self.relayed = Some(RelayOutcome::of(response));
        self
    }

    /// Headers are appended in list order. Values sharing a name keep their
    /// relative order; the order across different names is not preserved,
    /// since `HeaderMap` groups by name. Relayed responses carry a
    /// [`RelayOutcome`] in their extensions for the request logger.
    pub fn build(self) -> Result<HttpResponse, AppError> {
        let status = StatusCode::from_u16(self.status).map_err(|_| {
            AppError::internal(
                ErrorCode::InvalidUpstreamResponse,
                format!("status {} is not a valid HTTP status", self.status),
            )
        })?;

        let mut builder = HttpResponse::build(status);
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                AppError::internal(
                    ErrorCode::InvalidUpstreamResponse,
                    format!("'{name}' is not a valid header name"),
                )
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                AppError::internal(
                    ErrorCode::InvalidUpstreamResponse,
                    format!("value of header '{name}' is not representable"),
                )
            })?;
            builder.append_header((header_name, header_value));
        }
        if let Some(outcome) = self.relayed {
            builder.extensions_mut().insert(outcome);
        }

        Ok(builder.body(self.body))
    }
}
