use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, HttpMessage};
use futures_util::future::LocalBoxFuture;
use tracing::Level;

use super::request_trace::TraceId;
use crate::http::RelayOutcome;

/// Emits one `request_completed` event per request.
///
/// Level follows the status class. Responses forwarded from the
/// authorization service are marked `relayed`, with the Bearer `error`
/// code when the challenge carries one. The logged path has no query
/// string since it may hold an `access_token`.
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

/// What the completion event reports about one request.
struct Completion {
    method: String,
    path: String,
    trace_id: String,
    status: StatusCode,
    relay: Option<RelayOutcome>,
    duration_us: u64,
}

impl Completion {
    fn level(&self) -> Level {
        if self.status.is_server_error() {
            Level::ERROR
        } else if self.status.is_client_error() {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    fn emit(&self) {
        let auth_error = self
            .relay
            .as_ref()
            .and_then(|r| r.auth_error.as_deref())
            .unwrap_or("");
        let (method, path, trace_id) = (&self.method, &self.path, &self.trace_id);
        let status_code = self.status.as_u16();
        let relayed = self.relay.is_some();
        let duration_us = self.duration_us;

        macro_rules! completed {
            ($level:expr) => {
                tracing::event!(
                    $level,
                    http.method = %method,
                    url.path = %path,
                    http.status_code = status_code,
                    relayed = relayed,
                    auth.error = auth_error,
                    duration_us = duration_us,
                    trace_id = %trace_id,
                    message = "request_completed"
                )
            };
        }

        let level = self.level();
        if level == Level::ERROR {
            completed!(Level::ERROR);
        } else if level == Level::WARN {
            completed!(Level::WARN);
        } else {
            completed!(Level::INFO);
        }
    }
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .map(|id| id.as_str().to_owned())
            .unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, relay) = match &result {
                Ok(res) => (
                    res.status(),
                    res.response().extensions().get::<RelayOutcome>().cloned(),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };

            Completion {
                method,
                path,
                trace_id,
                status,
                relay,
                duration_us: start.elapsed().as_micros() as u64,
            }
            .emit();

            result
        })
    }
}
