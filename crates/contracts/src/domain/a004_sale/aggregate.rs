use serde::{Deserialize, Serialize};

/// Строка счёта: количество товара в конкретном счёте
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: i32,
    pub invoice_id: i32,
    pub product_id: i32,
    pub quantity: f64,
}
