use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{CoordinateTable, PipelineReport};
use crate::processors::{CoordinateJoiner, DatetimeNormalizer, Finalizer, LoadFactorMerger};
use crate::readers::{CoordinateExtractor, DatasetLoader, TableReader};
use crate::utils::progress::ProgressReporter;
use polars::prelude::*;
use std::path::Path;
use tracing::info;

/// Runs every stage, from raw CSV exports to the integer training table
pub struct Pipeline {
    config: PipelineConfig,
    reader: TableReader,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let reader = TableReader::with_encoding(&config.encoding)?;
        Ok(Self { config, reader })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(
        &self,
        input_dir: &Path,
        progress: Option<&ProgressReporter>,
    ) -> Result<(DataFrame, PipelineReport)> {
        let mut report = PipelineReport::default();

        let coordinates = self.load_coordinates(&mut report)?;

        let loader = DatasetLoader::new(self.reader).with_max_workers(self.config.max_workers);
        let (flights, files) = loader.load_directory(input_dir, progress)?;
        report.flight_rows = flights.height();
        report.files_read = files;

        info!("Reading load factors {}", self.config.load_factor.display());
        let load_factor = self.reader.read_table(&self.config.load_factor)?;

        let joined = self.transform(&flights, &load_factor, &coordinates, &mut report)?;

        let numeric = Finalizer::new().finalize(&joined)?;
        report.output_rows = numeric.height();
        report.output_columns = numeric.width();

        Ok((numeric, report))
    }

    /// Merge, normalize and join in-memory frames
    pub fn transform(
        &self,
        flights: &DataFrame,
        load_factor: &DataFrame,
        coordinates: &CoordinateTable,
        report: &mut PipelineReport,
    ) -> Result<DataFrame> {
        let (merged, merge_stats) = LoadFactorMerger::new().merge(flights, load_factor)?;
        report.load_factor_rows = merge_stats.load_factor_rows;
        report.load_factor_unmatched = merge_stats.unmatched_rows;
        report.rows_after_load_factor = merged.height();

        let merged = DatetimeNormalizer::new().normalize(merged)?;

        let (joined, join_stats) = CoordinateJoiner::new().join(&merged, coordinates)?;
        report.rows_after_origin_join = join_stats.rows_after_origin;
        report.rows_after_destination_join = join_stats.rows_after_destination;

        Ok(joined)
    }

    fn load_coordinates(&self, report: &mut PipelineReport) -> Result<CoordinateTable> {
        let extractor = CoordinateExtractor::from_config(self.reader, &self.config);
        let (coordinates, stats) = extractor.extract(&self.config.origin_destination)?;

        report.reference_rows = stats.reference_rows;
        report.aliases_replaced = stats.aliases_replaced;
        report.sentinel_rows_dropped = stats.sentinel_rows_dropped;
        report.coordinate_rows = coordinates.len();

        Ok(coordinates)
    }
}
