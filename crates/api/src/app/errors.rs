use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use backline_auth::AuthError;
use backline_core::DomainError;
use backline_crew::PasswordChangeError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
        DomainError::Validation(_) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", err.to_string())
        }
        DomainError::InvalidId(_) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", err.to_string())
        }
    }
}

/// Credential failures are 401 without detail; anything else in the auth
/// path is a server-side fault.
pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid credentials",
        ),
        other => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "auth_error",
            other.to_string(),
        ),
    }
}

pub fn password_change_error_to_response(err: PasswordChangeError) -> axum::response::Response {
    match err {
        PasswordChangeError::NotFound(e) => domain_error_to_response(e),
        PasswordChangeError::WrongCurrentPassword => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "current password does not match",
        ),
        PasswordChangeError::ConfirmationMismatch => json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "new password and confirmation do not match",
        ),
        PasswordChangeError::Hash(e) => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "auth_error",
            e.to_string(),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
