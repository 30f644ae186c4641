//! Error types for nestkit

use thiserror::Error;

/// Errors raised by distribution construction and queries
///
/// These indicate a programming or configuration bug in the caller (an
/// out-of-domain parameter or probability), never a transient condition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// A constructor parameter lies outside the distribution's valid domain
    #[error("{distribution} distribution: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: String,
    },

    /// Quantile queried with a probability outside [0, 1]
    #[error("input to quantile must be in [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

impl DistributionError {
    pub(crate) fn invalid(distribution: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            distribution,
            reason: reason.into(),
        }
    }
}

/// Errors raised while resolving the run configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown flag, missing argument, or a help/version request
    ///
    /// The entry point decides what to do with it (usually `err.exit()`).
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Seed specifier is neither "time" nor an unsigned integer
    #[error("invalid seed '{0}': expected \"time\" or an unsigned integer")]
    InvalidSeed(String),

    /// Compression specifier is not a floating-point number
    #[error("invalid compression '{0}': expected a floating-point number")]
    InvalidCompression(String),
}

/// Result type for distribution operations
pub type DistResult<T> = std::result::Result<T, DistributionError>;
