//! `/api/userinfo`: OpenID Connect UserInfo, answered by the authorization
//! service with claim values from the local user directory.

use actix_web::{web, HttpResponse};
use tracing::debug;

use crate::claims::DirectoryClaimsProvider;
use crate::error::AppError;
use crate::extractors::AccessToken;
use crate::http::response_builder::ResponseBuilder;
use crate::state::AppState;

async fn userinfo(
    token: AccessToken,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let claims = DirectoryClaimsProvider::new(&app_state.users);
    let response = app_state
        .authorization
        .handle_userinfo(token.as_deref(), &claims)
        .await;

    debug!(response = %response, "UserInfo handled");

    ResponseBuilder::new().relay(&response).build()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(userinfo))
            .route(web::post().to(userinfo)),
    );
}
