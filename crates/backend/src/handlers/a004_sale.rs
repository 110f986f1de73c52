use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a004_sale::Sale;

use super::{app_error, parse_id, ApiError};
use crate::shared::state::AppState;

/// GET /sales/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Sale>, ApiError> {
    let id = parse_id(&id, "sale")?;
    match state.sales.get(id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}
