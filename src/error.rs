use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Data frame error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    #[error("Invalid date in column '{column}': '{value}'")]
    DateParse { column: String, value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unknown input encoding: {0}")]
    UnknownEncoding(String),

    #[error("Missing required column '{column}' in {context}")]
    MissingColumn { column: String, context: String },

    #[error("Column {position} out of range in {context} ({width} columns)")]
    ColumnOutOfRange {
        position: usize,
        width: usize,
        context: String,
    },

    #[error("Schema mismatch in {file}: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        file: String,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("No CSV files found in {0}")]
    NoInputFiles(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Join key '{column}' has incompatible types: {left} and {right}")]
    KeyTypeMismatch {
        column: String,
        left: String,
        right: String,
    },

    #[error("Non-numeric value '{value}' in column '{column}'")]
    NonNumeric { column: String, value: String },

    #[error("Value {value} in column '{column}' cannot be represented as a 64-bit integer")]
    IntegerCast { column: String, value: f64 },

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
