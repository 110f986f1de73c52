use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_customer::{Customer, CustomerCheaperProduct, CustomerTotalByCondition};

use super::{app_error, parse_id, ApiError};
use crate::shared::state::AppState;

/// GET /customers/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let id = parse_id(&id, "customer")?;
    match state.customers.get(id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}

/// GET /customers/total-by-condition
pub async fn total_by_condition(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerTotalByCondition>>, ApiError> {
    match state.customers.total_by_condition().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}

/// GET /customers/top/cheaper-products
pub async fn cheaper_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerCheaperProduct>>, ApiError> {
    match state.customers.cheaper_products().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}
