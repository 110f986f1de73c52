use contracts::domain::a001_customer::Customer;

use crate::shared::file::record::{parse_field, text_field};
use crate::shared::file::{FromRecord, ParseError};

/// `id, last_name, first_name, situation` (фамилия идёт раньше имени)
impl FromRecord for Customer {
    const ARITY: usize = 4;

    fn from_record(fields: &[String]) -> Result<Self, ParseError> {
        Self::check_arity(fields)?;
        Ok(Customer {
            id: parse_field(fields, 0, "id")?,
            last_name: text_field(fields, 1),
            first_name: text_field(fields, 2),
            situation: text_field(fields, 3),
        })
    }
}
