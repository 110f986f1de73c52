use serde::{Deserialize, Serialize};

/// Строка отчёта "самые продаваемые товары"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMostSold {
    pub description: String,
    pub total: f64,
}
