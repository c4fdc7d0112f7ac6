use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use backline_inventory::{ItemCategoryId, ItemCategoryUpdate, NewItemCategory};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.item_categories.list())).into_response()
}

async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemCategoryId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.item_categories.get(id) {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewItemCategory>,
) -> axum::response::Response {
    let category = services.item_categories.create(body);
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<ItemCategoryUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemCategoryId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.item_categories.update(id, body) {
        Ok(category) => (StatusCode::OK, Json(category)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<ItemCategoryId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.item_categories.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
