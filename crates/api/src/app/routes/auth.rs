use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /auth/login`: exchange email + password for a bearer token.
pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match services.auth.authenticate(&body.email, &body.password) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({ "token": token })),
        )
            .into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}
