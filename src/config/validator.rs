//! Configuration validation

use super::*;
use anyhow::{Context, Result};

/// Validate resolved options before the sampler starts
pub fn validate_options(options: &Options) -> Result<()> {
    options.seed().context("Invalid value for -s/--seed")?;

    let compression = options
        .compression()
        .context("Invalid value for -c/--compression")?;
    validate_compression(compression)?;

    Ok(())
}

/// Validate the compression between levels
///
/// Each level encloses `1 / compression` of the previous level's prior mass,
/// so the value must be finite and greater than 1.
pub fn validate_compression(compression: f64) -> Result<()> {
    if !compression.is_finite() || compression <= 1.0 {
        anyhow::bail!("compression must be finite and > 1, got {}", compression);
    }
    Ok(())
}
