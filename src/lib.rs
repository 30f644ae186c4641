//! nestkit - run configuration and prior distributions for nested sampling
//!
//! nestkit holds the two pieces of a Monte-Carlo inference toolkit that the
//! sampler leans on before and during a run: the resolved, immutable run
//! options and a family of closed-form continuous distributions used for
//! prior transforms and proposal jumps.
//!
//! # Architecture
//!
//! - **Configuration**: clap-based CLI resolved once into an immutable [`Options`]
//! - **Distributions**: [`ContinuousDistribution`] trait with closed-form CDF and quantile
//! - **Sampler RNG**: seeded xoshiro256++ plus a heavy-tailed step for proposals

pub mod config;
pub mod distribution;
pub mod error;
pub mod rng;

// Re-export commonly used types
pub use config::{Options, Resolution};
pub use distribution::ContinuousDistribution;
pub use error::{ConfigError, DistributionError};

/// Result type used by application-level code
pub type Result<T> = anyhow::Result<T>;
