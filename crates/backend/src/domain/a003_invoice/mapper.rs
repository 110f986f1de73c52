use contracts::domain::a003_invoice::Invoice;

use crate::shared::file::record::{parse_field, text_field};
use crate::shared::file::{FromRecord, ParseError};

/// `id, datetime, customer_id`. Total is not in the file, it starts at 0.
impl FromRecord for Invoice {
    const ARITY: usize = 3;

    fn from_record(fields: &[String]) -> Result<Self, ParseError> {
        Self::check_arity(fields)?;
        Ok(Invoice {
            id: parse_field(fields, 0, "id")?,
            datetime: text_field(fields, 1),
            customer_id: parse_field(fields, 2, "customer_id")?,
            total: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_invoice_with_zero_total() {
        let fields: Vec<String> = ["1", "2022-01-06 11:11:11", "1000"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let invoice = Invoice::from_record(&fields).unwrap();
        assert_eq!(invoice.customer_id, 1000);
        assert_eq!(invoice.datetime, "2022-01-06 11:11:11");
        assert_eq!(invoice.total, 0.0);
    }

    #[test]
    fn test_bad_customer_id() {
        let fields: Vec<String> = ["1", "2022-01-06", "?"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert!(matches!(
            Invoice::from_record(&fields),
            Err(ParseError::InvalidField {
                field: "customer_id",
                ..
            })
        ));
    }
}
