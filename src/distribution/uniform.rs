//! Uniform distribution
//!
//! Flat density over a bounded interval. This is the default prior when a
//! parameter's plausible range is known but nothing else is.
//!
//! # Example
//!
//! ```
//! use nestkit::distribution::{ContinuousDistribution, uniform::Uniform};
//!
//! let prior = Uniform::new(-10.0, 10.0).unwrap();
//! assert_eq!(prior.quantile(0.5).unwrap(), 0.0);
//! assert_eq!(prior.cdf(20.0), 1.0);
//! ```

use super::{check_finite, check_probability, ContinuousDistribution};
use crate::error::{DistResult, DistributionError};

/// Uniform distribution on `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    const NAME: &'static str = "Uniform";

    /// Create a new uniform distribution
    ///
    /// # Errors
    ///
    /// Fails if either bound is not finite, `lower >= upper`, or the width
    /// `upper - lower` overflows.
    pub fn new(lower: f64, upper: f64) -> DistResult<Self> {
        check_finite(Self::NAME, "lower", lower)?;
        check_finite(Self::NAME, "upper", upper)?;
        if lower >= upper {
            return Err(DistributionError::invalid(
                Self::NAME,
                format!("lower ({}) must be less than upper ({})", lower, upper),
            ));
        }
        if !(upper - lower).is_finite() {
            return Err(DistributionError::invalid(
                Self::NAME,
                format!("width upper - lower overflows for [{}, {}]", lower, upper),
            ));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    #[inline]
    fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

impl ContinuousDistribution for Uniform {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        ((x - self.lower) / self.span()).clamp(0.0, 1.0)
    }

    #[inline]
    fn quantile(&self, p: f64) -> DistResult<f64> {
        check_probability(p)?;
        Ok(self.lower + p * self.span())
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.lower || x > self.upper {
            f64::NEG_INFINITY
        } else {
            -self.span().ln()
        }
    }
}
