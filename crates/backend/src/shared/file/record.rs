use std::str::FromStr;

use thiserror::Error;

use super::reader::SourceFile;
use crate::shared::error::AppError;

/// Why a single record could not be mapped. Never leaves the ingestion step.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("field `{field}` has invalid value {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Маппинг строки файла в сущность
pub trait FromRecord: Sized {
    /// Number of fields a record of this entity must have
    const ARITY: usize;

    fn from_record(fields: &[String]) -> Result<Self, ParseError>;

    fn check_arity(fields: &[String]) -> Result<(), ParseError> {
        if fields.len() == Self::ARITY {
            Ok(())
        } else {
            Err(ParseError::Arity {
                expected: Self::ARITY,
                found: fields.len(),
            })
        }
    }
}

/// Parses the field at `index`, trimming surrounding whitespace first.
pub fn parse_field<T: FromStr>(
    fields: &[String],
    index: usize,
    field: &'static str,
) -> Result<T, ParseError> {
    let raw = fields.get(index).map(|s| s.trim()).unwrap_or_default();
    raw.parse().map_err(|_| ParseError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// Like [`parse_field`], but `NaN` and infinities are rejected too.
pub fn parse_finite(
    fields: &[String],
    index: usize,
    field: &'static str,
) -> Result<f64, ParseError> {
    let value: f64 = parse_field(fields, index, field)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseError::InvalidField {
            field,
            value: fields[index].trim().to_string(),
        })
    }
}

pub fn text_field(fields: &[String], index: usize) -> String {
    fields
        .get(index)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Result of mapping a whole file
#[derive(Debug)]
pub struct MappedRecords<T> {
    pub items: Vec<T>,
    /// Records dropped because they could not be parsed
    pub skipped: usize,
}

/// Reads and maps every record of `source`.
///
/// Malformed records are dropped and counted, they do not fail the load.
/// Only an unreadable file is an error.
pub fn read_records<T: FromRecord>(source: &SourceFile) -> Result<MappedRecords<T>, AppError> {
    let mut items = Vec::new();
    let mut skipped = 0;

    for record in source.open()? {
        let (line_no, fields) = record?;
        match T::from_record(&fields) {
            Ok(item) => items.push(item),
            Err(e) => {
                tracing::debug!(
                    "{}:{} skipped: {}",
                    source.path.display(),
                    line_no,
                    e
                );
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(
            "{}: {} malformed record(s) skipped",
            source.path.display(),
            skipped
        );
    }

    Ok(MappedRecords { items, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[derive(Debug, PartialEq)]
    struct Pair {
        id: i32,
        name: String,
    }

    impl FromRecord for Pair {
        const ARITY: usize = 2;

        fn from_record(fields: &[String]) -> Result<Self, ParseError> {
            Self::check_arity(fields)?;
            Ok(Pair {
                id: parse_field(fields, 0, "id")?,
                name: text_field(fields, 1),
            })
        }
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_field_trims() {
        let f = fields(&[" 42 ", "x"]);
        assert_eq!(parse_field::<i32>(&f, 0, "id"), Ok(42));
        assert_eq!(
            parse_field::<i32>(&f, 1, "id"),
            Err(ParseError::InvalidField {
                field: "id",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn test_parse_finite() {
        let f = fields(&["2.5", "NaN", "inf", "-infinity"]);
        assert_eq!(parse_finite(&f, 0, "quantity"), Ok(2.5));
        for (index, raw) in [(1, "NaN"), (2, "inf"), (3, "-infinity")] {
            assert_eq!(
                parse_finite(&f, index, "quantity"),
                Err(ParseError::InvalidField {
                    field: "quantity",
                    value: raw.to_string()
                })
            );
        }
    }

    #[test]
    fn test_check_arity() {
        assert_eq!(
            Pair::from_record(&fields(&["1"])),
            Err(ParseError::Arity {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_read_records_counts_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1|one").unwrap();
        writeln!(file, "abc|bad id").unwrap();
        writeln!(file, "2|two|extra").unwrap();
        writeln!(file, "3| three ").unwrap();

        let source = SourceFile::new(file.path(), "|");
        let mapped: MappedRecords<Pair> = read_records(&source).unwrap();

        assert_eq!(mapped.skipped, 2);
        assert_eq!(
            mapped.items,
            vec![
                Pair {
                    id: 1,
                    name: "one".to_string()
                },
                Pair {
                    id: 3,
                    name: "three".to_string()
                },
            ]
        );
    }
}
