use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use resource_server::config::{AuthleteConfig, LogFormat, ServerConfig};
use resource_server::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use resource_server::state::build_state;
use resource_server::{routes, AppError, AuthleteClient, UserDirectory};
use tracing::info;

mod telemetry;

fn fail(context: &str, err: AppError) -> ! {
    eprintln!("❌ {context}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Environment variables must be set by the runtime environment.
    let log_format = LogFormat::from_env().unwrap_or_else(|e| fail("Invalid logging settings", e));
    telemetry::init_tracing(log_format);

    let server = ServerConfig::from_env().unwrap_or_else(|e| fail("Invalid server settings", e));
    let authlete =
        AuthleteConfig::from_env().unwrap_or_else(|e| fail("Invalid Authlete settings", e));

    info!(authlete = ?authlete, log.format = %log_format, "Authlete configuration loaded");

    let client = AuthleteClient::new(authlete)
        .unwrap_or_else(|e| fail("Failed to create Authlete client", e));

    let app_state = build_state()
        .with_authorization(Arc::new(client))
        .with_users(UserDirectory::with_dummy_users())
        .build()
        .unwrap_or_else(|e| fail("Failed to build application state", e));

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    println!(
        "🚀 Starting resource server on http://{}:{}",
        server.host, server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
