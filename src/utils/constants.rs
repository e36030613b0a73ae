/// Flight record column names
pub const ORIGIN: &str = "Origin";
pub const DESTINATION: &str = "Destination";
pub const FLIGHT_NUMBER: &str = "Flight Number";
pub const DEPARTURE_DATE: &str = "Departure Date";
pub const DEPARTURE_TIME: &str = "Departure Time";
pub const CAPTURE_DATE: &str = "Capture Date";

/// Composite key identifying one flight instance
pub const FLIGHT_KEY: [&str; 4] = [ORIGIN, DESTINATION, FLIGHT_NUMBER, DEPARTURE_DATE];

/// Date columns converted to epoch seconds
pub const DATE_COLUMNS: [&str; 2] = [DEPARTURE_DATE, CAPTURE_DATE];

/// Coordinate column names
pub const O_ALTITUDE: &str = "o_altitude";
pub const O_LONGITUDE: &str = "o_longitude";
pub const D_ALTITUDE: &str = "d_altitude";
pub const D_LONGITUDE: &str = "d_longitude";

/// Number of trailing coordinate columns moved to the front of the output
pub const COORDINATE_COLUMN_COUNT: usize = 4;

/// Leading columns of the merged table that are not part of the output
pub const DROPPED_LEADING_COLUMNS: usize = 2;

/// Suffixes for overlapping non-key columns in a join
pub const LEFT_SUFFIX: &str = "_x";
pub const RIGHT_SUFFIX: &str = "_y";

/// Reference file defaults
pub const DEFAULT_CODE_COLUMN: &str = "GKA";
pub const DEFAULT_ALTITUDE_POSITION: usize = 6;
pub const DEFAULT_LONGITUDE_POSITION: usize = 7;
pub const DEFAULT_ALIAS_FROM: &str = "SXF";
pub const DEFAULT_ALIAS_TO: &str = "BER";
pub const DEFAULT_MISSING_SENTINEL: &str = "\\N";

/// File locations
pub const DEFAULT_ORIGIN_DESTINATION: &str = "dataset/origin_destination.csv";
pub const DEFAULT_LOAD_FACTOR: &str = "dataset/finallf_train.csv";
pub const DEFAULT_OUTPUT: &str = "dataset/final_dataset_train.csv";
pub const DEFAULT_CONFIG_FILE: &str = "flightdata.toml";
pub const CSV_EXTENSION: &str = "csv";

/// Processing defaults
pub const DEFAULT_ENCODING: &str = "utf-8";
pub const DEFAULT_HEAD_ROWS: usize = 10;
pub const ENV_PREFIX: &str = "FLIGHTDATA";
