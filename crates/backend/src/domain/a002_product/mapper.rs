use contracts::domain::a002_product::Product;

use crate::shared::file::record::{parse_field, parse_finite, text_field};
use crate::shared::file::{FromRecord, ParseError};

/// `id, description, price`
impl FromRecord for Product {
    const ARITY: usize = 3;

    fn from_record(fields: &[String]) -> Result<Self, ParseError> {
        Self::check_arity(fields)?;
        let price = parse_finite(fields, 2, "price")?;
        if price < 0.0 {
            return Err(ParseError::InvalidField {
                field: "price",
                value: fields[2].trim().to_string(),
            });
        }
        Ok(Product {
            id: parse_field(fields, 0, "id")?,
            description: text_field(fields, 1),
            price,
        })
    }
}
