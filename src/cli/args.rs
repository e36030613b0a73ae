use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flightdata-processor")]
#[command(about = "Build the integer flight training table from schedule, load factor and airport CSV exports")]
#[command(version)]
pub struct Cli {
    /// Directory of per-flight CSV files to concatenate
    #[arg(value_name = "FINALDATA_TRAIN")]
    pub finaldata_train: PathBuf,

    #[arg(
        long = "origin_destination",
        visible_alias = "origin-destination",
        help = "Airport reference CSV [default: dataset/origin_destination.csv]"
    )]
    pub origin_destination: Option<PathBuf>,

    #[arg(
        long = "load_factor",
        visible_alias = "load-factor",
        help = "Load factor CSV [default: dataset/finallf_train.csv]"
    )]
    pub load_factor: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Output CSV path [default: dataset/final_dataset_train.csv]"
    )]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Settings file [default: flightdata.toml, if present]")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Rows printed after processing [default: 10]")]
    pub sample: Option<usize>,

    #[arg(long, help = "Threads used to read flight files [default: CPU count]")]
    pub max_workers: Option<usize>,

    #[arg(long, default_value = "false", help = "Run every stage but do not write the output")]
    pub validate_only: bool,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide progress bars")]
    pub quiet: bool,

    #[arg(long, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse the process arguments, accepting the two-letter `-od` / `-lf` flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Rewrite `-od` and `-lf` (optionally `-od=path`) to their long forms.
///
/// clap only supports single character short flags.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    const LEGACY: [(&str, &str); 2] = [
        ("-od", "--origin_destination"),
        ("-lf", "--load_factor"),
    ];

    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            for (short, long) in LEGACY {
                if text == short {
                    return OsString::from(long);
                }
                if let Some(value) = text.strip_prefix(short).and_then(|r| r.strip_prefix('=')) {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}
