use contracts::domain::a004_sale::Sale;

use crate::shared::file::record::{parse_field, parse_finite};
use crate::shared::file::{FromRecord, ParseError};

/// `id, product_id, invoice_id, quantity`
impl FromRecord for Sale {
    const ARITY: usize = 4;

    fn from_record(fields: &[String]) -> Result<Self, ParseError> {
        Self::check_arity(fields)?;
        Ok(Sale {
            id: parse_field(fields, 0, "id")?,
            product_id: parse_field(fields, 1, "product_id")?,
            invoice_id: parse_field(fields, 2, "invoice_id")?,
            quantity: parse_finite(fields, 3, "quantity")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_product_before_invoice() {
        assert_eq!(
            Sale::from_record(&record(&["1", "2000", "1000", "2"])).unwrap(),
            Sale {
                id: 1,
                invoice_id: 1000,
                product_id: 2000,
                quantity: 2.0
            }
        );
    }

    #[test]
    fn test_rejects_non_finite_quantity() {
        for raw in ["NaN", "inf", "-inf"] {
            assert_eq!(
                Sale::from_record(&record(&["1", "1", "1", raw])),
                Err(ParseError::InvalidField {
                    field: "quantity",
                    value: raw.to_string()
                })
            );
        }
    }
}
