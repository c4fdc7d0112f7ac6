use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use backline_events::{EventTypeId, EventTypeUpdate, NewEventType};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_event_types).post(create_event_type))
        .route(
            "/:id",
            get(get_event_type)
                .put(update_event_type)
                .delete(delete_event_type),
        )
}

async fn list_event_types(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.event_types.list())).into_response()
}

async fn get_event_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventTypeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.event_types.get(id) {
        Ok(event_type) => (StatusCode::OK, Json(event_type)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_event_type(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewEventType>,
) -> axum::response::Response {
    let event_type = services.event_types.create(body);
    (StatusCode::CREATED, Json(event_type)).into_response()
}

async fn update_event_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<EventTypeUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventTypeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.event_types.update(id, body) {
        Ok(event_type) => (StatusCode::OK, Json(event_type)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_event_type(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventTypeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.event_types.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
