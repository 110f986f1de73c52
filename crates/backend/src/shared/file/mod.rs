//! Чтение текстовых файлов загрузки.
//!
//! Each line is one record, fields are separated by a literal
//! (possibly multi-character) delimiter.

pub mod reader;
pub mod record;

pub use reader::{DelimitedReader, SourceFile};
pub use record::{read_records, FromRecord, MappedRecords, ParseError};

/// Writes `lines` into a temporary file split by `#$%#`.
/// The file lives as long as the returned handle.
#[cfg(test)]
pub fn temp_source(lines: &[&str]) -> (tempfile::NamedTempFile, SourceFile) {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("write temp file");
    }
    let source = SourceFile::new(file.path(), "#$%#");
    (file, source)
}
