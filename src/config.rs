use crate::error::{ProcessingError, Result};
use crate::utils::constants::*;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Settings for one pipeline run.
///
/// Values are layered: built-in defaults, then an optional TOML file, then
/// `FLIGHTDATA_*` environment variables. Command line flags are applied last
/// by the caller.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PipelineConfig {
    pub origin_destination: PathBuf,
    pub load_factor: PathBuf,
    pub output: PathBuf,

    /// Column of the reference file holding the airport code
    #[validate(length(min = 1))]
    pub code_column: String,

    /// Ordinal positions of the altitude and longitude columns in the reference file
    pub altitude_position: usize,
    pub longitude_position: usize,

    #[validate(length(min = 1))]
    pub alias_from: String,
    #[validate(length(min = 1))]
    pub alias_to: String,

    pub missing_sentinel: String,

    /// `encoding_rs` label used to decode every input file
    #[validate(length(min = 1))]
    pub encoding: String,

    pub head_rows: usize,

    #[validate(range(min = 1))]
    pub max_workers: usize,
}

impl PipelineConfig {
    /// Load settings, reading `path` if it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));

        let settings = Config::builder()
            .set_default("origin_destination", DEFAULT_ORIGIN_DESTINATION)?
            .set_default("load_factor", DEFAULT_LOAD_FACTOR)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("code_column", DEFAULT_CODE_COLUMN)?
            .set_default("altitude_position", DEFAULT_ALTITUDE_POSITION as u64)?
            .set_default("longitude_position", DEFAULT_LONGITUDE_POSITION as u64)?
            .set_default("alias_from", DEFAULT_ALIAS_FROM)?
            .set_default("alias_to", DEFAULT_ALIAS_TO)?
            .set_default("missing_sentinel", DEFAULT_MISSING_SENTINEL)?
            .set_default("encoding", DEFAULT_ENCODING)?
            .set_default("head_rows", DEFAULT_HEAD_ROWS as u64)?
            .set_default("max_workers", num_cpus::get() as u64)?
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: PipelineConfig = settings.try_deserialize()?;
        config.validate()?;
        config.check_positions()?;

        Ok(config)
    }

    fn check_positions(&self) -> Result<()> {
        if self.altitude_position == self.longitude_position {
            return Err(ProcessingError::InvalidConfig(format!(
                "altitude and longitude must be different columns (both {})",
                self.altitude_position
            )));
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            origin_destination: PathBuf::from(DEFAULT_ORIGIN_DESTINATION),
            load_factor: PathBuf::from(DEFAULT_LOAD_FACTOR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            code_column: DEFAULT_CODE_COLUMN.to_string(),
            altitude_position: DEFAULT_ALTITUDE_POSITION,
            longitude_position: DEFAULT_LONGITUDE_POSITION,
            alias_from: DEFAULT_ALIAS_FROM.to_string(),
            alias_to: DEFAULT_ALIAS_TO.to_string(),
            missing_sentinel: DEFAULT_MISSING_SENTINEL.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            head_rows: DEFAULT_HEAD_ROWS,
            max_workers: num_cpus::get(),
        }
    }
}
