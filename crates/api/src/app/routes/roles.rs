use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use backline_crew::{NewRole, RoleId, RoleUpdate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_roles).post(create_role))
        .route("/find", get(find_role))
        .route("/:id", get(get_role).put(update_role).delete(delete_role))
}

#[derive(Debug, Deserialize)]
struct FindRoleQuery {
    name: String,
}

async fn list_roles(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.roles.list())).into_response()
}

async fn get_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<RoleId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.roles.get(id) {
        Ok(role) => (StatusCode::OK, Json(role)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn find_role(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<FindRoleQuery>,
) -> axum::response::Response {
    match services.roles.find_by_name(&q.name) {
        Ok(role) => (StatusCode::OK, Json(role)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_role(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewRole>,
) -> axum::response::Response {
    let role = services.roles.create(body);
    (StatusCode::CREATED, Json(role)).into_response()
}

async fn update_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<RoleUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<RoleId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.roles.update(id, body) {
        Ok(role) => (StatusCode::OK, Json(role)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_role(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<RoleId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.roles.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
