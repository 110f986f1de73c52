use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::{error_response, ApiError};
use crate::shared::state::AppState;
use crate::usecases::u501_load_files;

/// GET /load-files
pub async fn load_files(State(state): State<AppState>) -> Result<Json<&'static str>, ApiError> {
    match u501_load_files::execute(&state).await {
        Ok(_) => Ok(Json("Data loaded!")),
        Err(e) => {
            // step context + the service error; the service error already carries its cause
            let message = e
                .chain()
                .take(2)
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(": ");
            tracing::error!("Load failed: {}", message);
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, message))
        }
    }
}
