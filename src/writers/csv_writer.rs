use crate::error::Result;
use crate::models::column_names;
use polars::prelude::{CsvWriter as FrameWriter, DataFrame, SerWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

const INDEX_COLUMN: &str = "index";

/// Writes the final frame as CSV with a leading, unnamed row index column.
/// Nulls are written as empty fields.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_table(&self, frame: &DataFrame, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(frame, &mut out)?;
        out.flush()?;

        info!(
            "Wrote {} rows x {} columns to {}",
            frame.height(),
            frame.width(),
            path.display()
        );
        Ok(())
    }

    pub fn write_to<W: Write>(&self, frame: &DataFrame, out: &mut W) -> Result<()> {
        // The index field of the header stays empty
        let names = column_names(frame);
        let mut header = csv::Writer::from_writer(&mut *out);
        header.write_record(std::iter::once("").chain(names.iter().map(String::as_str)))?;
        header.flush()?;
        drop(header);

        let mut indexed = frame.with_row_index(INDEX_COLUMN.into(), None)?;
        FrameWriter::new(&mut *out)
            .include_header(false)
            .finish(&mut indexed)?;

        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
