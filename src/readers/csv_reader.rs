use crate::error::{ProcessingError, Result};
use encoding_rs::Encoding;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a comma separated file with a header row into a [`DataFrame`].
///
/// Column types are inferred from all rows and empty fields are null. Rows
/// shorter than the header are padded with nulls; longer rows are an error.
#[derive(Clone, Copy)]
pub struct TableReader {
    encoding: &'static Encoding,
}

impl TableReader {
    pub fn new() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
        }
    }

    /// Reader decoding input with the given `encoding_rs` label (e.g. "latin1")
    pub fn with_encoding(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ProcessingError::UnknownEncoding(label.to_string()))?;
        Ok(Self { encoding })
    }

    /// Read a file from disk
    pub fn read_table(&self, path: &Path) -> Result<DataFrame> {
        let bytes = std::fs::read(path)?;

        // A byte order mark overrides the configured encoding
        let (text, used, had_errors) = self.encoding.decode(&bytes);
        if had_errors {
            warn!(
                "{}: malformed {} sequences replaced",
                path.display(),
                used.name()
            );
        }

        let frame = self.parse_str(&text)?;
        debug!(
            "Read {} rows x {} columns from {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        Ok(frame)
    }

    /// Parse already decoded CSV text
    pub fn parse_str(&self, text: &str) -> Result<DataFrame> {
        let frame = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .into_reader_with_file_handle(Cursor::new(text.as_bytes()))
            .finish()?;
        Ok(frame)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}
