use actix_web::web;

pub mod country;
pub mod health;
pub mod userinfo;

/// Register every route. Shared by `main.rs` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Country lookup: /api/country/{countryCode}
    cfg.service(web::scope("/api/country").configure(country::configure_routes));

    // OIDC UserInfo: /api/userinfo
    cfg.service(web::scope("/api/userinfo").configure(userinfo::configure_routes));
}
