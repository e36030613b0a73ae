use crate::error::Result;
use crate::processors::frame_join::{join, JoinKind};
use crate::utils::constants::FLIGHT_KEY;
use polars::prelude::*;
use tracing::{info, warn};

// Set on every load-factor row; null after the join means no match
const MATCH_MARKER: &str = "__load_factor_matched";

/// Attaches load-factor values to flight records on the composite flight key
pub struct LoadFactorMerger;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub load_factor_rows: usize,
    pub unmatched_rows: usize,
}

impl LoadFactorMerger {
    pub fn new() -> Self {
        Self
    }

    /// Left join: every flight row is kept, unmatched ones get null load factors.
    /// Duplicate keys on either side multiply rows.
    pub fn merge(&self, flights: &DataFrame, load_factor: &DataFrame) -> Result<(DataFrame, MergeStats)> {
        let marked = load_factor
            .clone()
            .lazy()
            .with_column(lit(true).alias(MATCH_MARKER))
            .collect()?;

        let merged = join(flights, &marked, &FLIGHT_KEY, JoinKind::Left)?;
        let unmatched_rows = merged.column(MATCH_MARKER)?.null_count();
        let merged = merged.drop(MATCH_MARKER)?;

        if merged.height() != flights.height() {
            warn!(
                "Load factor join changed row count {} -> {} (duplicate flight keys)",
                flights.height(),
                merged.height()
            );
        }
        info!(
            "Merged load factors: {} rows, {} without a match",
            merged.height(),
            unmatched_rows
        );

        Ok((
            merged,
            MergeStats {
                load_factor_rows: load_factor.height(),
                unmatched_rows,
            },
        ))
    }
}

impl Default for LoadFactorMerger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::{column_names, series};
    use crate::readers::TableReader;
    use pretty_assertions::assert_eq;

    const FLIGHTS: &str = "\
Origin,Destination,Flight Number,Departure Date,Departure Time,Capture Date,Seats
BER,CDG,1234,2023-01-15,09:45,2023-01-01,180
BER,CDG,1234,2023-01-16,09:45,2023-01-01,180
CDG,BER,1235,2023-01-15,14:30,2023-01-01,180
";

    fn load_factors(merged: &DataFrame) -> Vec<Option<i64>> {
        series(merged, "Load Factor", "test")
            .unwrap()
            .i64()
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn test_left_join_preserves_flight_rows() -> Result<()> {
        let reader = TableReader::new();
        let flights = reader.parse_str(FLIGHTS)?;
        let load_factor = reader.parse_str(
            "Origin,Destination,Flight Number,Departure Date,Load Factor\n\
             BER,CDG,1234,2023-01-15,87\n\
             CDG,BER,1235,2023-01-15,64\n",
        )?;

        let (merged, stats) = LoadFactorMerger::new().merge(&flights, &load_factor)?;

        assert_eq!(merged.height(), flights.height());
        assert_eq!(column_names(&merged).last().map(String::as_str), Some("Load Factor"));
        assert_eq!(load_factors(&merged), vec![Some(87), None, Some(64)]);
        assert_eq!(stats, MergeStats { load_factor_rows: 2, unmatched_rows: 1 });

        Ok(())
    }

    #[test]
    fn test_float_flight_numbers_still_match() -> Result<()> {
        let reader = TableReader::new();
        let flights = reader.parse_str(FLIGHTS)?;
        // One empty flight number turns the whole column into floats
        let load_factor = reader.parse_str(
            "Origin,Destination,Flight Number,Departure Date,Load Factor\n\
             BER,CDG,1234.0,2023-01-15,87\n\
             CDG,BER,,2023-01-15,64\n",
        )?;

        let (merged, stats) = LoadFactorMerger::new().merge(&flights, &load_factor)?;

        assert_eq!(load_factors(&merged), vec![Some(87), None, None]);
        assert_eq!(stats.unmatched_rows, 2);

        Ok(())
    }

    #[test]
    fn test_missing_key_in_load_factor_file() -> Result<()> {
        let reader = TableReader::new();
        let flights = reader.parse_str(FLIGHTS)?;
        let load_factor = reader.parse_str("Origin,Destination,Load Factor\nBER,CDG,87\n")?;

        assert!(matches!(
            LoadFactorMerger::new().merge(&flights, &load_factor),
            Err(ProcessingError::MissingColumn { .. })
        ));
        Ok(())
    }
}
