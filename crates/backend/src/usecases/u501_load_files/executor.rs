use anyhow::{Context, Result};
use serde::Serialize;

use crate::shared::state::AppState;

/// Сколько записей загружено на каждом шаге
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub products: usize,
    pub customers: usize,
    pub invoices: usize,
    pub sales: usize,
    pub totals_updated: usize,
}

/// Полная загрузка: товары → клиенты → счета → продажи, затем пересчёт итогов.
///
/// Stops at the first failing step; whatever earlier steps stored stays in
/// the database, and rerunning skips it.
pub async fn execute(state: &AppState) -> Result<LoadSummary> {
    tracing::info!("Loading source files");

    let products = state
        .products
        .store_bulk()
        .await
        .context("error storing products")?;
    let customers = state
        .customers
        .store_bulk()
        .await
        .context("error storing customers")?;
    let invoices = state
        .invoices
        .store_bulk()
        .await
        .context("error storing invoices")?;
    let sales = state
        .sales
        .store_bulk()
        .await
        .context("error storing sales")?;

    let totals = state
        .invoices
        .update_totals()
        .await
        .context("error updating invoice totals")?;

    let summary = LoadSummary {
        products: products.len(),
        customers: customers.len(),
        invoices: invoices.len(),
        sales: sales.len(),
        totals_updated: totals.len(),
    };
    tracing::info!("Load finished: {:?}", summary);
    Ok(summary)
}
