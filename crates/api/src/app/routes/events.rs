use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};

use backline_crew::EmployeeId;
use backline_events::{BillId, EventId, EventUpdate, NewEvent};
use backline_inventory::StoredItemId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/:id", get(get_event).put(update_event).delete(delete_event))
        .route("/:id/employees", put(update_employees))
        .route("/:id/items", put(update_stored_items))
        .route("/:id/bills", put(update_bills))
}

async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.events.list())).into_response()
}

async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.events.get(id) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewEvent>,
) -> axum::response::Response {
    let event = services.events.create(body);
    (StatusCode::CREATED, Json(event)).into_response()
}

async fn update_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<EventUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.events.update(id, body) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.events.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_employees(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(q): Query<dto::AssocQuery>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let employee_ids: Vec<EmployeeId> = match q.ids() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.events.update_employees(id, &employee_ids, q.remove) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_stored_items(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(q): Query<dto::AssocQuery>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let stored_item_ids: Vec<StoredItemId> = match q.ids() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services
        .events
        .update_stored_items(id, &stored_item_ids, q.remove)
    {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_bills(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(q): Query<dto::AssocQuery>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EventId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let bill_ids: Vec<BillId> = match q.ids() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.events.update_bills(id, &bill_ids, q.remove) {
        Ok(event) => (StatusCode::OK, Json(event)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
