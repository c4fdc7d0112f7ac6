use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use backline_events::{BillId, BillUpdate, NewBill};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_bills).post(create_bill))
        .route("/:id", get(get_bill).put(update_bill).delete(delete_bill))
}

async fn list_bills(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.bills.list())).into_response()
}

async fn get_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<BillId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.bills.get(id) {
        Ok(bill) => (StatusCode::OK, Json(bill)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewBill>,
) -> axum::response::Response {
    let bill = services.bills.create(body);
    (StatusCode::CREATED, Json(bill)).into_response()
}

async fn update_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<BillUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<BillId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.bills.update(id, body) {
        Ok(bill) => (StatusCode::OK, Json(bill)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_bill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<BillId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.bills.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
