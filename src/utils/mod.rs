pub mod constants;
pub mod datetime;
pub mod progress;

pub use constants::*;
pub use datetime::parse_epoch_seconds;
pub use progress::ProgressReporter;
