pub mod coordinate_joiner;
pub mod datetime_normalizer;
pub mod finalizer;
pub mod frame_join;
pub mod load_factor_merger;
pub mod pipeline;

pub use coordinate_joiner::{CoordinateJoiner, JoinStats};
pub use datetime_normalizer::DatetimeNormalizer;
pub use finalizer::Finalizer;
pub use frame_join::{join, JoinKind};
pub use load_factor_merger::{LoadFactorMerger, MergeStats};
pub use pipeline::Pipeline;
