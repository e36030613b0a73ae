use crate::error::{ProcessingError, Result};
use crate::models::column_names;
use crate::utils::constants::{COORDINATE_COLUMN_COUNT, DROPPED_LEADING_COLUMNS};
use polars::prelude::*;
use tracing::debug;

/// Reorders the merged frame and casts it to integers
pub struct Finalizer;

impl Finalizer {
    pub fn new() -> Self {
        Self
    }

    /// Output column positions: the trailing coordinate columns, then columns
    /// `2 .. n-4`. The first two columns are not carried over.
    pub fn output_positions(width: usize) -> Vec<usize> {
        let tail_start = width.saturating_sub(COORDINATE_COLUMN_COUNT);
        (tail_start..width)
            .chain(DROPPED_LEADING_COLUMNS..tail_start)
            .collect()
    }

    pub fn reorder(&self, frame: &DataFrame) -> Result<DataFrame> {
        let names = column_names(frame);
        let selected: Vec<String> = Self::output_positions(names.len())
            .into_iter()
            .map(|position| names[position].clone())
            .collect();
        Ok(frame.select(selected)?)
    }

    /// Reorder, coerce every column to numbers and truncate to `Int64`.
    /// Nulls stay null.
    pub fn finalize(&self, frame: &DataFrame) -> Result<DataFrame> {
        let reordered = self.reorder(frame)?;

        let columns = reordered
            .get_columns()
            .iter()
            .map(|column| to_integers(column.as_materialized_series()).map(IntoColumn::into_column))
            .collect::<Result<Vec<Column>>>()?;
        let finalized = DataFrame::new(columns)?;

        debug!(
            "Finalized {} rows x {} columns",
            finalized.height(),
            finalized.width()
        );
        Ok(finalized)
    }
}

impl Default for Finalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_integers(series: &Series) -> Result<Series> {
    let name = series.name().clone();
    let dtype = series.dtype();

    if dtype.is_integer() || matches!(dtype, DataType::Boolean | DataType::Null) {
        return Ok(series.strict_cast(&DataType::Int64)?);
    }

    let values = if dtype.is_float() {
        series
            .cast(&DataType::Float64)?
            .f64()?
            .into_iter()
            .map(|value| value.map(|n| float_to_integer(name.as_str(), n)).transpose())
            .collect::<Result<Vec<Option<i64>>>>()?
    } else if dtype == &DataType::String {
        series
            .str()?
            .into_iter()
            .map(|value| value.map(|s| text_to_integer(name.as_str(), s)).transpose())
            .collect::<Result<Vec<Option<i64>>>>()?
    } else {
        return Err(ProcessingError::NonNumeric {
            column: name.to_string(),
            value: dtype.to_string(),
        });
    };

    Ok(Series::new(name, values))
}

/// Whole numbers are taken as they are; anything else goes through `f64`
fn text_to_integer(column: &str, text: &str) -> Result<i64> {
    let text = text.trim();
    if let Ok(integer) = text.parse::<i64>() {
        return Ok(integer);
    }

    let number = text.parse::<f64>().map_err(|_| ProcessingError::NonNumeric {
        column: column.to_string(),
        value: text.to_string(),
    })?;
    float_to_integer(column, number)
}

fn float_to_integer(column: &str, number: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range
    if !number.is_finite() || number < i64::MIN as f64 || number >= i64::MAX as f64 {
        return Err(ProcessingError::IntegerCast {
            column: column.to_string(),
            value: number,
        });
    }

    Ok(number.trunc() as i64)
}
