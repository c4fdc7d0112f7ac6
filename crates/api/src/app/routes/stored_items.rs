use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use backline_inventory::{NewStoredItem, StoredItemId, StoredItemUpdate};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_stored_items).post(create_stored_item))
        .route("/find", get(find_by_availability))
        .route(
            "/:id",
            get(get_stored_item)
                .put(update_stored_item)
                .delete(delete_stored_item),
        )
}

#[derive(Debug, Deserialize)]
struct AvailabilityQuery {
    availability: bool,
}

async fn list_stored_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.stored_items.list())).into_response()
}

async fn get_stored_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<StoredItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.stored_items.get(id) {
        Ok(unit) => (StatusCode::OK, Json(unit)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn find_by_availability(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<AvailabilityQuery>,
) -> axum::response::Response {
    match services.stored_items.find_by_availability(q.availability) {
        Ok(units) => (StatusCode::OK, Json(units)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_stored_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewStoredItem>,
) -> axum::response::Response {
    let unit = services.stored_items.create(body);
    (StatusCode::CREATED, Json(unit)).into_response()
}

async fn update_stored_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<StoredItemUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<StoredItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.stored_items.update(id, body) {
        Ok(unit) => (StatusCode::OK, Json(unit)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_stored_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<StoredItemId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.stored_items.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
