use crate::error::{ProcessingError, Result};
use crate::models::{require_column, series};
use crate::utils::constants::{DATE_COLUMNS, DEPARTURE_TIME};
use crate::utils::datetime::parse_epoch_seconds;
use polars::prelude::*;
use tracing::debug;

const CONTEXT: &str = "flight records";

/// Turns the time-of-day and date columns into values the finalizer can cast
pub struct DatetimeNormalizer {
    time_column: String,
    date_columns: Vec<String>,
}

impl DatetimeNormalizer {
    pub fn new() -> Self {
        Self {
            time_column: DEPARTURE_TIME.to_string(),
            date_columns: DATE_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// `09:45` becomes `09.45`; dates become epoch seconds as floats
    pub fn normalize(&self, frame: DataFrame) -> Result<DataFrame> {
        let empty_times = series(&frame, &self.time_column, CONTEXT)?.null_count();
        if empty_times > 0 {
            return Err(ProcessingError::MissingData(format!(
                "'{}' is empty in {} rows",
                self.time_column, empty_times
            )));
        }

        let time = self.time_column.as_str();
        let mut frame = frame
            .lazy()
            .with_column(
                col(time)
                    .cast(DataType::String)
                    .str()
                    .replace_all(lit(":"), lit("."), true),
            )
            .collect()?;

        for column in &self.date_columns {
            require_column(&frame, column, CONTEXT)?;
            let text = frame.column(column)?.cast(&DataType::String)?;
            let seconds = text
                .as_materialized_series()
                .str()?
                .into_iter()
                .map(|value| to_epoch(column, value))
                .collect::<Result<Vec<f64>>>()?;
            frame.with_column(Series::new(column.as_str().into(), seconds))?;
        }

        debug!(
            "Normalized '{}' and {} date columns over {} rows",
            self.time_column,
            self.date_columns.len(),
            frame.height()
        );
        Ok(frame)
    }
}

impl Default for DatetimeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_epoch(column: &str, value: Option<&str>) -> Result<f64> {
    value
        .and_then(parse_epoch_seconds)
        .ok_or_else(|| ProcessingError::DateParse {
            column: column.to_string(),
            value: value.unwrap_or_default().to_string(),
        })
}
