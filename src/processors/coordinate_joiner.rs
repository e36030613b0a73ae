use crate::error::Result;
use crate::models::CoordinateTable;
use crate::processors::frame_join::{join, JoinKind};
use crate::utils::constants::{DESTINATION, ORIGIN};
use polars::prelude::*;
use tracing::info;

/// Adds origin and destination coordinates, dropping flights with an unknown endpoint
pub struct CoordinateJoiner;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoinStats {
    pub rows_before: usize,
    pub rows_after_origin: usize,
    pub rows_after_destination: usize,
}

impl CoordinateJoiner {
    pub fn new() -> Self {
        Self
    }

    pub fn join(&self, frame: &DataFrame, coordinates: &CoordinateTable) -> Result<(DataFrame, JoinStats)> {
        let with_origin = join(frame, coordinates.as_origin(), &[ORIGIN], JoinKind::Inner)?;
        let with_both = join(
            &with_origin,
            &coordinates.as_destination()?,
            &[DESTINATION],
            JoinKind::Inner,
        )?;

        let stats = JoinStats {
            rows_before: frame.height(),
            rows_after_origin: with_origin.height(),
            rows_after_destination: with_both.height(),
        };
        info!(
            "Coordinate join kept {} of {} rows",
            stats.rows_after_destination, stats.rows_before
        );

        Ok((with_both, stats))
    }
}

impl Default for CoordinateJoiner {
    fn default() -> Self {
        Self::new()
    }
}
