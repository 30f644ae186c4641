//! Configuration module
//!
//! Resolves command-line input into the immutable [`Options`] record that the
//! sampler reads for the rest of the run.
//!
//! Resolution happens once, single-threaded, in the entry point. Afterwards
//! the record is only read, so it can be shared freely between workers.
//!
//! # Resolution Rules
//!
//! - A thread count <= 0 is repaired to 1 and reported as a [`Diagnostic`]
//! - Non-option arguments are reported and otherwise ignored
//! - The seed and compression specifiers are kept as text and parsed on
//!   demand by [`Options::seed`] and [`Options::compression`]
//! - File paths are not checked here; reading them is the job of whoever
//!   opens them
//! - Unknown flags and missing values abort resolution with
//!   [`ConfigError::Usage`]; the caller decides whether to exit

pub mod cli;
pub mod validator;

use crate::error::ConfigError;
use cli::{Cli, DEFAULT_COMPRESSION, DEFAULT_OPTIONS_FILE, TIME_SEED};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Resolved run options
///
/// Immutable once built: fields are private and only exposed through
/// accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    levels_file: Option<PathBuf>,
    options_file: PathBuf,
    seed: String,
    data_file: Option<PathBuf>,
    compression: String,
    num_threads: usize,
    config_file: Option<PathBuf>,
    use_gzip: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            levels_file: None,
            options_file: PathBuf::from(DEFAULT_OPTIONS_FILE),
            seed: TIME_SEED.to_string(),
            data_file: None,
            compression: DEFAULT_COMPRESSION.to_string(),
            num_threads: 1,
            config_file: None,
            use_gzip: false,
        }
    }
}

/// Notice produced while resolving options
///
/// Diagnostics never stop the run; they describe input that was repaired or
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Thread count was <= 0 and has been replaced with 1
    InvalidThreadCount(i64),
    /// A positional argument was given; it is ignored
    NonOptionArgument(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::InvalidThreadCount(n) => {
                write!(f, "Invalid number of threads: {}, using 1", n)
            }
            Diagnostic::NonOptionArgument(arg) => write!(f, "Non-option argument {}", arg),
        }
    }
}

/// Result of resolving options: the record plus any diagnostics
#[derive(Debug, Clone)]
pub struct Resolution {
    pub options: Options,
    pub diagnostics: Vec<Diagnostic>,
}

impl Options {
    /// Parse and resolve an explicit argument list (first item is the program name)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Usage`] for unknown flags, missing values, and
    /// help/version requests.
    pub fn from_args<I, T>(args: I) -> Result<Resolution, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_args(args)?;
        Ok(Self::resolve(cli))
    }

    /// Resolve parsed CLI arguments into options
    ///
    /// Each diagnostic is also logged as it is produced.
    pub fn resolve(cli: Cli) -> Resolution {
        let mut diagnostics = Vec::new();

        for arg in cli.extra {
            let diag = Diagnostic::NonOptionArgument(arg);
            tracing::warn!("{}", diag);
            diagnostics.push(diag);
        }

        let num_threads = match usize::try_from(cli.threads) {
            Ok(n) if n >= 1 => n,
            _ => {
                let diag = Diagnostic::InvalidThreadCount(cli.threads);
                tracing::warn!("{}", diag);
                diagnostics.push(diag);
                1
            }
        };

        let options = Self {
            levels_file: cli.levels_file,
            options_file: cli.options_file,
            seed: cli.seed,
            data_file: cli.data_file,
            compression: cli.compression,
            num_threads,
            config_file: cli.config_file,
            use_gzip: cli.gzip,
        };

        Resolution {
            options,
            diagnostics,
        }
    }

    /// Resolve the seed specifier to an unsigned integer
    ///
    /// `"time"` yields the current Unix time in seconds, so two resolutions
    /// made at different instants may differ. Anything else must parse as a
    /// `u64`.
    pub fn seed(&self) -> Result<u64, ConfigError> {
        if self.seed == TIME_SEED {
            let seed = wall_clock_seed();
            tracing::debug!(seed, "seed taken from system time");
            return Ok(seed);
        }
        self.seed
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSeed(self.seed.clone()))
    }

    /// Parse the compression specifier
    pub fn compression(&self) -> Result<f64, ConfigError> {
        self.compression
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidCompression(self.compression.clone()))
    }

    pub fn seed_spec(&self) -> &str {
        &self.seed
    }

    pub fn compression_spec(&self) -> &str {
        &self.compression
    }

    /// Number of worker threads, always >= 1
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn levels_file(&self) -> Option<&Path> {
        self.levels_file.as_deref()
    }

    pub fn options_file(&self) -> &Path {
        &self.options_file
    }

    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    pub fn use_gzip(&self) -> bool {
        self.use_gzip
    }
}

/// Current Unix time in seconds
fn wall_clock_seed() -> u64 {
    chrono::Utc::now().timestamp().max(0) as u64
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn path_or_none(p: Option<&Path>) -> String {
            p.map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string())
        }

        writeln!(f, "Options file: {}", self.options_file.display())?;
        writeln!(f, "Levels file: {}", path_or_none(self.levels_file()))?;
        writeln!(f, "Data file: {}", path_or_none(self.data_file()))?;
        writeln!(f, "Config file: {}", path_or_none(self.config_file()))?;
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(f, "Compression: {}", self.compression)?;
        writeln!(f, "Threads: {}", self.num_threads)?;
        write!(f, "Gzip output: {}", if self.use_gzip { "yes" } else { "no" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn resolve(args: &[&str]) -> Resolution {
        let mut argv = vec!["nestkit"];
        argv.extend_from_slice(args);
        Options::from_args(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let res = resolve(&[]);
        assert!(res.diagnostics.is_empty());
        assert_eq!(res.options, Options::default());
        assert_eq!(res.options.options_file(), Path::new("OPTIONS"));
        assert_eq!(res.options.seed_spec(), "time");
        assert_eq!(res.options.num_threads(), 1);
        assert!(!res.options.use_gzip());
        assert!(res.options.levels_file().is_none());
        assert!(res.options.data_file().is_none());
        assert!(res.options.config_file().is_none());
    }

    #[test]
    fn test_negative_threads_repaired() {
        let res = resolve(&["-t", "-3"]);
        assert_eq!(res.options.num_threads(), 1);
        assert_eq!(res.diagnostics, vec![Diagnostic::InvalidThreadCount(-3)]);
    }

    #[test]
    fn test_zero_threads_repaired() {
        let res = resolve(&["-t", "0"]);
        assert_eq!(res.options.num_threads(), 1);
        assert_eq!(res.diagnostics, vec![Diagnostic::InvalidThreadCount(0)]);
    }

    #[test]
    fn test_positive_threads_kept() {
        let res = resolve(&["-t", "4"]);
        assert_eq!(res.options.num_threads(), 4);
        assert!(res.diagnostics.is_empty());
    }

    #[test]
    fn test_non_option_arguments_reported() {
        let res = resolve(&["extra"]);
        assert_eq!(
            res.diagnostics,
            vec![Diagnostic::NonOptionArgument("extra".to_string())]
        );
        assert_eq!(res.diagnostics[0].to_string(), "Non-option argument extra");
    }

    #[test]
    fn test_seed_fixed() {
        let res = resolve(&["-s", "42"]);
        assert_eq!(res.options.seed().unwrap(), 42);
        assert_eq!(res.options.seed().unwrap(), 42);
    }

    #[test]
    fn test_seed_time() {
        let res = resolve(&["-s", "time"]);
        let before = chrono::Utc::now().timestamp() as u64;
        let seed = res.options.seed().unwrap();
        let after = chrono::Utc::now().timestamp() as u64;
        assert!(seed >= before && seed <= after);
    }

    #[test]
    fn test_seed_non_numeric_rejected() {
        let res = resolve(&["-s", "banana"]);
        assert!(matches!(
            res.options.seed(),
            Err(ConfigError::InvalidSeed(ref s)) if s == "banana"
        ));
        let res = resolve(&["-s", "4.5"]);
        assert!(res.options.seed().is_err());
    }

    #[test]
    fn test_compression_default_is_e() {
        let res = resolve(&[]);
        assert_relative_eq!(
            res.options.compression().unwrap(),
            std::f64::consts::E,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_compression_explicit() {
        let res = resolve(&["-c", "10.5"]);
        assert_relative_eq!(res.options.compression().unwrap(), 10.5);
    }

    #[test]
    fn test_compression_non_numeric_rejected() {
        let res = resolve(&["-c", "lots"]);
        assert!(matches!(
            res.options.compression(),
            Err(ConfigError::InvalidCompression(_))
        ));
    }

    #[test]
    fn test_paths_not_validated() {
        let res = resolve(&["-l", "/no/such/levels", "-d", "/no/such/data", "-f", "/no/such/cfg"]);
        assert_eq!(res.options.levels_file(), Some(Path::new("/no/such/levels")));
        assert_eq!(res.options.data_file(), Some(Path::new("/no/such/data")));
        assert_eq!(res.options.config_file(), Some(Path::new("/no/such/cfg")));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Options::from_args(["nestkit", "-q"]).unwrap_err();
        assert!(matches!(err, ConfigError::Usage(_)));
    }

    #[test]
    fn test_missing_argument_is_usage_error() {
        let err = Options::from_args(["nestkit", "-c"]).unwrap_err();
        assert!(matches!(err, ConfigError::Usage(_)));
    }

    #[test]
    fn test_gzip_flag() {
        assert!(resolve(&["-z"]).options.use_gzip());
    }

    #[test]
    fn test_display() {
        let res = resolve(&["-t", "2", "-s", "7"]);
        let text = res.options.to_string();
        assert!(text.contains("Threads: 2"));
        assert!(text.contains("Seed: 7"));
        assert!(text.contains("Levels file: none"));
    }
}
