use crate::config::PipelineConfig;
use crate::error::Result;
use crate::models::{column_at, column_names, require_column, CoordinateTable};
use crate::readers::TableReader;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

const CONTEXT: &str = "origin/destination reference";

/// Outcome of cleaning the reference table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub reference_rows: usize,
    pub aliases_replaced: usize,
    pub sentinel_rows_dropped: usize,
}

/// Pulls airport coordinates out of the origin/destination reference file.
///
/// The altitude and longitude columns are picked by ordinal position, not
/// by header name, to match the layout of existing reference exports.
pub struct CoordinateExtractor {
    reader: TableReader,
    code_column: String,
    altitude_position: usize,
    longitude_position: usize,
    alias_from: String,
    alias_to: String,
    missing_sentinel: String,
}

impl CoordinateExtractor {
    pub fn new(reader: TableReader) -> Self {
        Self::from_config(reader, &PipelineConfig::default())
    }

    pub fn from_config(reader: TableReader, config: &PipelineConfig) -> Self {
        Self {
            reader,
            code_column: config.code_column.clone(),
            altitude_position: config.altitude_position,
            longitude_position: config.longitude_position,
            alias_from: config.alias_from.clone(),
            alias_to: config.alias_to.clone(),
            missing_sentinel: config.missing_sentinel.clone(),
        }
    }

    pub fn extract(&self, path: &Path) -> Result<(CoordinateTable, ExtractionStats)> {
        info!("Reading airport reference {}", path.display());
        let frame = self.reader.read_table(path)?;
        self.extract_from_frame(frame)
    }

    pub fn extract_from_frame(&self, frame: DataFrame) -> Result<(CoordinateTable, ExtractionStats)> {
        let mut stats = ExtractionStats {
            reference_rows: frame.height(),
            ..Default::default()
        };

        // Applies to every text cell, not only the code column
        let (frame, replaced) = replace_exact(frame, &self.alias_from, &self.alias_to)?;
        stats.aliases_replaced = replaced;

        require_column(&frame, &self.code_column, CONTEXT)?;
        let altitude = column_at(&frame, self.altitude_position, CONTEXT)?;
        let longitude = column_at(&frame, self.longitude_position, CONTEXT)?;

        // Null codes are kept: only the sentinel text marks a missing code
        let code = self.code_column.as_str();
        let selected = frame
            .lazy()
            .filter(
                col(code)
                    .cast(DataType::String)
                    .neq_missing(lit(self.missing_sentinel.as_str())),
            )
            .select([col(code), col(altitude.as_str()), col(longitude.as_str())])
            .collect()?;
        stats.sentinel_rows_dropped = stats.reference_rows - selected.height();

        debug!(
            "Reference: {} rows, {} '{}' cells replaced, {} '{}' codes dropped",
            stats.reference_rows,
            stats.aliases_replaced,
            self.alias_from,
            stats.sentinel_rows_dropped,
            self.missing_sentinel
        );

        Ok((CoordinateTable::from_frame(selected)?, stats))
    }
}

/// Swap every text cell equal to `from` for `to`. Returns the number of cells changed.
fn replace_exact(frame: DataFrame, from: &str, to: &str) -> Result<(DataFrame, usize)> {
    let mut replaced = 0;
    let mut updates = Vec::new();

    for name in column_names(&frame) {
        let column = frame.column(&name)?;
        if column.dtype() != &DataType::String {
            continue;
        }
        let hits = column
            .as_materialized_series()
            .str()?
            .into_iter()
            .filter(|value| *value == Some(from))
            .count();
        if hits > 0 {
            replaced += hits;
            updates.push(
                when(col(name.as_str()).eq(lit(from)))
                    .then(lit(to))
                    .otherwise(col(name.as_str()))
                    .alias(name.as_str()),
            );
        }
    }

    if updates.is_empty() {
        return Ok((frame, 0));
    }
    Ok((frame.lazy().with_columns(updates).collect()?, replaced))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProcessingError;
    use crate::models::series;
    use crate::utils::constants::{O_ALTITUDE, O_LONGITUDE, ORIGIN};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REFERENCE: &str = "\
1,Goroka Airport,Goroka,Papua New Guinea,GKA,AYGA,-6.081689834590001,145.391998291,5282
2,Schoenefeld,Berlin,Germany,SXF,EDDB,52.380001,13.5225,157
3,Some Strip,Nowhere,Nowhere,\\N,XXXX,10.0,20.0,0
4,Charles de Gaulle,Paris,France,CDG,LFPG,49.012798,2.55,392
5,Tegel,Berlin,Germany,TXL,EDDT,52.5597,13.2877,122
";

    fn reference_frame(rows: &str) -> DataFrame {
        let header = "id,name,city,country,GKA,icao,lat,lon,alt\n";
        TableReader::new()
            .parse_str(&format!("{}{}", header, rows))
            .unwrap()
    }

    #[test]
    fn test_alias_replaced_and_sentinel_dropped() -> Result<()> {
        let extractor = CoordinateExtractor::new(TableReader::new());
        let (coordinates, stats) = extractor.extract_from_frame(reference_frame(REFERENCE))?;

        assert_eq!(stats.reference_rows, 5);
        assert_eq!(stats.aliases_replaced, 1);
        assert_eq!(stats.sentinel_rows_dropped, 1);
        assert_eq!(coordinates.len(), 4);

        let frame = coordinates.as_origin();
        assert_eq!(column_names(frame), vec![ORIGIN, O_ALTITUDE, O_LONGITUDE]);
        let codes = series(frame, ORIGIN, "test")?.str()?;
        assert_eq!(
            codes.into_iter().collect::<Vec<_>>(),
            vec![Some("GKA"), Some("BER"), Some("CDG"), Some("TXL")]
        );
        assert_eq!(series(frame, O_ALTITUDE, "test")?.f64()?.get(1), Some(52.380001));
        assert_eq!(series(frame, O_LONGITUDE, "test")?.f64()?.get(1), Some(13.5225));
        assert!(!coordinates.contains("SXF"));

        Ok(())
    }

    #[test]
    fn test_alias_replaced_outside_code_column() -> Result<()> {
        let rows = REFERENCE.replace("Charles de Gaulle", "SXF");

        let extractor = CoordinateExtractor::new(TableReader::new());
        let (_, stats) = extractor.extract_from_frame(reference_frame(&rows))?;

        assert_eq!(stats.aliases_replaced, 2);
        Ok(())
    }

    #[test]
    fn test_empty_code_is_kept() -> Result<()> {
        let rows = REFERENCE.replace("TXL", "");

        let extractor = CoordinateExtractor::new(TableReader::new());
        let (coordinates, stats) = extractor.extract_from_frame(reference_frame(&rows))?;

        assert_eq!(stats.sentinel_rows_dropped, 1);
        assert_eq!(coordinates.len(), 4);
        Ok(())
    }

    #[test]
    fn test_first_line_is_header() -> Result<()> {
        // Raw airport exports have no header; the first airport becomes it
        let mut file = NamedTempFile::new()?;
        write!(file, "{}", REFERENCE)?;

        let extractor = CoordinateExtractor::new(TableReader::new());
        let (coordinates, _) = extractor.extract(file.path())?;

        assert_eq!(coordinates.len(), 3);
        assert!(coordinates.contains("BER"));
        assert!(!coordinates.contains("GKA"));
        Ok(())
    }

    #[test]
    fn test_missing_code_column() {
        let frame = TableReader::new()
            .parse_str("id,IATA,a,b,c,d,lat,lon\n1,BER,x,x,x,x,52,13\n")
            .unwrap();

        let extractor = CoordinateExtractor::new(TableReader::new());
        assert!(matches!(
            extractor.extract_from_frame(frame),
            Err(ProcessingError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_coordinate_position_out_of_range() {
        let frame = TableReader::new().parse_str("GKA,lat\nBER,52\n").unwrap();

        let extractor = CoordinateExtractor::new(TableReader::new());
        assert!(matches!(
            extractor.extract_from_frame(frame),
            Err(ProcessingError::ColumnOutOfRange { position: 6, .. })
        ));
    }
}
