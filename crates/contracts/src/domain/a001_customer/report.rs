use serde::{Deserialize, Serialize};

/// Sum of invoice totals for every customer situation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTotalByCondition {
    pub situation: String,
    pub total: f64,
}

/// Customer who bought one of the cheapest products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCheaperProduct {
    pub first_name: String,
    pub last_name: String,
}
