pub mod csv_reader;
pub mod dataset_loader;
pub mod origin_destination_reader;

pub use csv_reader::TableReader;
pub use dataset_loader::DatasetLoader;
pub use origin_destination_reader::{CoordinateExtractor, ExtractionStats};
