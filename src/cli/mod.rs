pub mod args;
pub mod commands;

pub use args::{normalize_legacy_flags, Cli};
pub use commands::{resolve_config, run};
