use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use backline_inventory::{ItemId, ItemUpdate, NewItem};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

async fn list_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.items.list())).into_response()
}

async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.items.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewItem>,
) -> axum::response::Response {
    let item = services.items.create(body);
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<ItemUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.items.update(id, body) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.items.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
