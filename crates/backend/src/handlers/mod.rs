pub mod a001_customer;
pub mod a002_product;
pub mod a003_invoice;
pub mod a004_sale;
pub mod u501_load_files;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::shared::error::AppError;

/// Статус и JSON-тело `{"error": "..."}`
pub type ApiError = (StatusCode, Json<Value>);

pub fn error_response(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

/// Maps a service error to its HTTP status, keeping the error text as the message.
pub fn app_error(e: AppError) -> ApiError {
    let status = match &e {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Validation(_) => StatusCode::BAD_REQUEST,
        AppError::File { .. }
        | AppError::Prepare(_)
        | AppError::Exec(_)
        | AppError::Database(_) => {
            tracing::error!("{}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, e.to_string())
}

/// Path ids are integers; anything else is a 400 "invalid ID". An integer
/// outside the `i32` id range can not match a row and is a 404.
pub fn parse_id(raw: &str, entity: &'static str) -> Result<i32, ApiError> {
    let id: i64 = raw
        .parse()
        .map_err(|_| app_error(AppError::Validation("invalid ID".to_string())))?;
    i32::try_from(id)
        .map_err(|_| error_response(StatusCode::NOT_FOUND, format!("{} not found", entity)))
}
