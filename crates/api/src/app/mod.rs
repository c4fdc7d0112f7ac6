//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store and service construction
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: request DTOs and id-parsing helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `/health` and `/auth/login` are open; everything else requires a valid
/// bearer token.
pub fn build_app(jwt_secret: String) -> Router {
    let tokens = Arc::new(backline_auth::Hs256TokenCodec::new(jwt_secret.as_bytes()));
    let auth_state = middleware::AuthState {
        tokens: Arc::clone(&tokens),
    };

    let services = Arc::new(services::build_services(tokens));

    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        auth_state,
        middleware::auth_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/auth/login", post(routes::auth::login))
        .merge(protected)
        .layer(Extension(services))
}
