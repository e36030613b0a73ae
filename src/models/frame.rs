//! Lookups on polars frames that report failures as [`ProcessingError`]s

use crate::error::{ProcessingError, Result};
use polars::prelude::*;

/// Column names in frame order
pub fn column_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Position of `column`, or a `MissingColumn` error mentioning `context`
pub fn require_column(frame: &DataFrame, column: &str, context: &str) -> Result<usize> {
    frame
        .get_column_index(column)
        .ok_or_else(|| ProcessingError::MissingColumn {
            column: column.to_string(),
            context: context.to_string(),
        })
}

/// Name of the column at `position`
pub fn column_at(frame: &DataFrame, position: usize, context: &str) -> Result<String> {
    frame
        .get_column_names()
        .get(position)
        .map(|name| name.to_string())
        .ok_or_else(|| ProcessingError::ColumnOutOfRange {
            position,
            width: frame.width(),
            context: context.to_string(),
        })
}

/// The named column as a series
pub fn series<'a>(frame: &'a DataFrame, column: &str, context: &str) -> Result<&'a Series> {
    require_column(frame, column, context)?;
    Ok(frame.column(column)?.as_materialized_series())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("Origin".into(), &["BER", "CDG"]).into_column(),
            Series::new("Seats".into(), &[180i64, 150]).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookups() -> Result<()> {
        let frame = frame();

        assert_eq!(column_names(&frame), vec!["Origin", "Seats"]);
        assert_eq!(require_column(&frame, "Seats", "flights")?, 1);
        assert_eq!(column_at(&frame, 0, "flights")?, "Origin");
        assert_eq!(series(&frame, "Seats", "flights")?.len(), 2);

        Ok(())
    }

    #[test]
    fn test_lookup_errors() {
        let frame = frame();

        assert!(matches!(
            require_column(&frame, "Price", "flights"),
            Err(ProcessingError::MissingColumn { ref column, .. }) if column == "Price"
        ));
        assert!(matches!(
            column_at(&frame, 7, "flights"),
            Err(ProcessingError::ColumnOutOfRange { position: 7, width: 2, .. })
        ));
    }
}
