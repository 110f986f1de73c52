use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a003_invoice::Invoice;

use super::{app_error, parse_id, ApiError};
use crate::shared::state::AppState;

/// GET /invoices/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, ApiError> {
    let id = parse_id(&id, "invoice")?;
    match state.invoices.get(id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}
