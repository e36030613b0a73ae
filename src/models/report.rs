use std::path::PathBuf;

/// Row counts collected while the pipeline runs
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub files_read: Vec<PathBuf>,
    pub reference_rows: usize,
    pub aliases_replaced: usize,
    pub sentinel_rows_dropped: usize,
    pub coordinate_rows: usize,
    pub flight_rows: usize,
    pub load_factor_rows: usize,
    pub rows_after_load_factor: usize,
    pub load_factor_unmatched: usize,
    pub rows_after_origin_join: usize,
    pub rows_after_destination_join: usize,
    pub output_rows: usize,
    pub output_columns: usize,
}

impl PipelineReport {
    pub fn rows_dropped_by_coordinates(&self) -> usize {
        self.rows_after_load_factor
            .saturating_sub(self.rows_after_destination_join)
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Pipeline Summary:\n");
        summary.push_str(&format!(
            "- Reference airports: {} rows ({} alias cells replaced, {} missing codes dropped, {} kept)\n",
            self.reference_rows,
            self.aliases_replaced,
            self.sentinel_rows_dropped,
            self.coordinate_rows
        ));
        summary.push_str(&format!(
            "- Flight files: {} ({} rows)\n",
            self.files_read.len(),
            self.flight_rows
        ));
        summary.push_str(&format!(
            "- Load factor: {} rows, {} flights without a match\n",
            self.load_factor_rows, self.load_factor_unmatched
        ));
        summary.push_str(&format!(
            "- Coordinate join: {} -> {} (origin) -> {} (destination), {} dropped\n",
            self.rows_after_load_factor,
            self.rows_after_origin_join,
            self.rows_after_destination_join,
            self.rows_dropped_by_coordinates()
        ));
        summary.push_str(&format!(
            "- Output: {} rows x {} columns",
            self.output_rows, self.output_columns
        ));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_dropped_by_coordinates() {
        let report = PipelineReport {
            rows_after_load_factor: 10,
            rows_after_origin_join: 8,
            rows_after_destination_join: 7,
            ..Default::default()
        };

        assert_eq!(report.rows_dropped_by_coordinates(), 3);
        assert!(report.summary().contains("10 -> 8 (origin) -> 7 (destination), 3 dropped"));
    }
}
