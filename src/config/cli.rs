//! CLI argument parsing using clap

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default options file name
pub const DEFAULT_OPTIONS_FILE: &str = "OPTIONS";

/// Seed specifier meaning "derive the seed from the wall clock"
pub const TIME_SEED: &str = "time";

/// Default compression between levels, written out as e
pub const DEFAULT_COMPRESSION: &str = "2.7182818284590451";

/// nestkit - nested sampling run configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "nestkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Load level structure from the specified file
    #[arg(short = 'l', long = "levels", value_name = "FILE")]
    pub levels_file: Option<PathBuf>,

    /// Load sampler options from the specified file
    #[arg(short = 'o', long = "options", value_name = "FILE", default_value = DEFAULT_OPTIONS_FILE)]
    pub options_file: PathBuf,

    /// Seed for the random number generator ("time" uses the system clock)
    #[arg(short = 's', long, default_value = TIME_SEED)]
    pub seed: String,

    /// Load data from the specified file, if required
    #[arg(short = 'd', long = "data", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Compression value between levels (default is e)
    #[arg(short = 'c', long, default_value = DEFAULT_COMPRESSION)]
    pub compression: String,

    /// Number of threads to run on (values <= 0 fall back to 1)
    #[arg(short = 't', long, default_value_t = 1, allow_negative_numbers = true)]
    pub threads: i64,

    /// Custom configuration file for problem-specific options
    #[arg(short = 'f', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Gzip the sample output file
    #[arg(short = 'z', long = "gzip")]
    pub gzip: bool,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, env = "NESTKIT_LOG", default_value = "warn")]
    pub log_level: tracing::Level,

    /// Extra non-option arguments (reported and ignored)
    #[arg(value_name = "ARGS")]
    pub extra: Vec<String>,
}

impl Cli {
    /// Parse the process arguments
    ///
    /// Unknown flags, missing values, and help/version requests come back as
    /// a `clap::Error`; nothing here exits the process.
    pub fn try_parse_env() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parse an explicit argument list (first item is the program name)
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}
