use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a002_product::{Product, ProductMostSold};

use super::{app_error, parse_id, ApiError};
use crate::shared::state::AppState;

/// GET /products/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id, "product")?;
    match state.products.get(id).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}

/// GET /products/top/most-selled
pub async fn most_sold(State(state): State<AppState>) -> Result<Json<Vec<ProductMostSold>>, ApiError> {
    match state.products.most_sold().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => Err(app_error(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::test_support::{state_for_dir, write_lines};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_get_by_id_statuses() {
        let dir = tempfile::tempdir().unwrap();
        write_lines(dir.path(), "products.txt", &["1000#$%#Mate#$%#1250.5"]);
        let state = state_for_dir(dir.path()).await;
        state.products.store_bulk().await.unwrap();

        let Json(product) = get_by_id(State(state.clone()), Path("1000".to_string()))
            .await
            .unwrap();
        assert_eq!(product.description, "Mate");

        let (status, Json(body)) = get_by_id(State(state.clone()), Path("mate".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "invalid ID");

        let (status, Json(body)) = get_by_id(State(state), Path("1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "product not found");
    }

    #[tokio::test]
    async fn test_most_sold_empty() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_for_dir(dir.path()).await;
        let Json(rows) = most_sold(State(state)).await.unwrap();
        assert!(rows.is_empty());
    }
}
