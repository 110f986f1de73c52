use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::shared::error::AppError;

/// Path of a source file together with its field delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub delimiter: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, delimiter: &str) -> Self {
        Self {
            path: path.into(),
            delimiter: delimiter.to_string(),
        }
    }

    pub fn open(&self) -> Result<DelimitedReader, AppError> {
        DelimitedReader::open(&self.path, &self.delimiter)
    }
}

/// Lazy, one-shot iterator over the records of a delimited file.
///
/// Yields `(line_number, fields)`; line numbers start at 1. Blank lines are
/// skipped, a trailing `\r` is stripped. Lines that are not valid UTF-8 are
/// read as Latin-1.
pub struct DelimitedReader {
    path: PathBuf,
    delimiter: String,
    reader: BufReader<File>,
    buf: Vec<u8>,
    line_no: usize,
}

impl DelimitedReader {
    pub fn open(path: &Path, delimiter: &str) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|source| AppError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            delimiter: delimiter.to_string(),
            reader: BufReader::new(file),
            buf: Vec::new(),
            line_no: 0,
        })
    }
}

impl Iterator for DelimitedReader {
    type Item = Result<(usize, Vec<String>), AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(source) => {
                    return Some(Err(AppError::File {
                        path: self.path.clone(),
                        source,
                    }))
                }
            }
            self.line_no += 1;

            let line = decode_line(&self.buf);
            let line = line.trim_end_matches('\n');
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                continue;
            }

            let fields = if self.delimiter.is_empty() {
                vec![line.to_string()]
            } else {
                line.split(self.delimiter.as_str())
                    .map(str::to_string)
                    .collect()
            };
            return Some(Ok((self.line_no, fields)));
        }
    }
}

fn decode_line(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(line) => line.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
