use axum::{routing::get, Router};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // U501 Load files
        .route("/load-files", get(handlers::u501_load_files::load_files))
        // A001 Customers
        .route(
            "/customers/total-by-condition",
            get(handlers::a001_customer::total_by_condition),
        )
        .route(
            "/customers/top/cheaper-products",
            get(handlers::a001_customer::cheaper_products),
        )
        .route("/customers/:id", get(handlers::a001_customer::get_by_id))
        // A002 Products
        .route(
            "/products/top/most-selled",
            get(handlers::a002_product::most_sold),
        )
        .route("/products/:id", get(handlers::a002_product::get_by_id))
        // A003 Invoices
        .route("/invoices/:id", get(handlers::a003_invoice::get_by_id))
        // A004 Sales
        .route("/sales/:id", get(handlers::a004_sale::get_by_id))
        .with_state(state)
}
