use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use paintcalc_core::ValidationError;

pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    let status = match err {
        ValidationError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        ValidationError::InvalidArea { .. }
        | ValidationError::InvalidCoatCount { .. }
        | ValidationError::MissingSurfaceClass(_)
        | ValidationError::InvalidSurfaceClass { .. } => StatusCode::BAD_REQUEST,
    };
    json_error(status, err.code(), err.to_string())
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
