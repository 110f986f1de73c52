use serde::{Deserialize, Serialize};

/// Счёт. `total` равен 0 до пересчёта итогов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i32,
    pub customer_id: i32,
    pub datetime: String,
    pub total: f64,
}

/// Recalculated total for a single invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotal {
    pub id: i32,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_roundtrips_through_json() {
        let json = r#"{"id":1,"customer_id":7,"datetime":"2022-01-06 11:11:11","total":0.0}"#;
        let invoice: Invoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.customer_id, 7);
        assert_eq!(invoice.total, 0.0);
    }
}
