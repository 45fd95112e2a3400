//! `/api/country/{countryCode}`: ISO 3166-1 lookup behind a valid access token.

use actix_web::{web, HttpResponse};
use serde_json::{Map, Value};
use tracing::debug;

use crate::countries;
use crate::error::AppError;
use crate::extractors::AccessToken;
use crate::http::response_builder::{ResponseBuilder, APPLICATION_JSON_UTF8};
use crate::state::AppState;

async fn get_country(
    path: web::Path<String>,
    token: AccessToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let country_code = path.into_inner();

    let info = app_state
        .authorization
        .validate_access_token(token.as_deref(), &[], None)
        .await
        .map_err(|rejection| {
            debug!(
                status = rejection.response().status(),
                "Access token rejected by authorization service"
            );
            AppError::from(rejection)
        })?;

    debug!(subject = ?info.subject, country_code = %country_code, "Country lookup");

    let builder = ResponseBuilder::new().content_type(APPLICATION_JSON_UTF8);
    let builder = match countries::lookup(&country_code) {
        Some(record) => builder.json(record)?,
        // Unknown codes answer 200 with an empty object.
        None => builder.json(&Map::<String, Value>::new())?,
    };
    builder.build()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{countryCode}")
            .route(web::get().to(get_country))
            .route(web::post().to(get_country)),
    );
}
