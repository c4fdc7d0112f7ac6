use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;

use backline_crew::{EmployeeId, EmployeeUpdate, NewEmployee, PasswordChange, RoleId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/find", get(find_by_name))
        .route("/find-email", get(find_by_email))
        .route("/roles/find", get(roles_by_email))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/:id/password", put(change_password))
        .route("/:id/roles", get(roles_of).put(update_roles))
}

#[derive(Debug, Deserialize)]
struct FindNameQuery {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct FindEmailQuery {
    email: String,
}

async fn list_employees(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.employees.list())).into_response()
}

async fn get_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.employees.get(id) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn find_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<FindNameQuery>,
) -> axum::response::Response {
    match services.employees.find_by_name(&q.first_name, &q.last_name) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn find_by_email(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<FindEmailQuery>,
) -> axum::response::Response {
    match services.employees.find_by_email(&q.email) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<NewEmployee>,
) -> axum::response::Response {
    match services.employees.create(body) {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(e) => errors::auth_error_to_response(e),
    }
}

async fn update_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<EmployeeUpdate>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.employees.update(id, body) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn delete_employee(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.employees.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn change_password(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<PasswordChange>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.employees.change_password(id, body) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::password_change_error_to_response(e),
    }
}

async fn roles_of(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.employees.roles_of(id) {
        Ok(roles) => (StatusCode::OK, Json(roles)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn roles_by_email(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<FindEmailQuery>,
) -> axum::response::Response {
    match services.employees.roles_by_email(&q.email) {
        Ok(roles) => (StatusCode::OK, Json(roles)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_roles(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Query(q): Query<dto::AssocQuery>,
) -> axum::response::Response {
    let id = match dto::parse_id::<EmployeeId>(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let role_ids: Vec<RoleId> = match q.ids() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    match services.employees.update_roles(id, &role_ids, q.remove) {
        Ok(employee) => (StatusCode::OK, Json(employee)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
