pub mod coordinate;
pub mod frame;
pub mod report;

pub use coordinate::CoordinateTable;
pub use frame::{column_at, column_names, require_column, series};
pub use report::PipelineReport;
