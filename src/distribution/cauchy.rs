//! Cauchy distribution
//!
//! Heavy-tailed distribution with no defined mean or variance. It is a common
//! weakly-informative prior for location parameters, because its tails let
//! the likelihood pull the parameter far from the center when the data
//! demands it.
//!
//! # Parameters
//!
//! - **center**: location of the peak (median)
//! - **width**: half width at half maximum (must be > 0)
//!
//! # Example
//!
//! ```
//! use nestkit::distribution::{ContinuousDistribution, cauchy::Cauchy};
//!
//! let prior = Cauchy::new(5.0, 2.0).unwrap();
//! assert_eq!(prior.quantile(0.5).unwrap(), 5.0);
//! assert!(Cauchy::new(0.0, 0.0).is_err());
//! ```

use super::{check_finite, check_positive, check_probability, ContinuousDistribution};
use crate::error::DistResult;
use std::f64::consts::PI;

/// Cauchy distribution with location `center` and scale `width`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cauchy {
    center: f64,
    width: f64,
}

impl Cauchy {
    const NAME: &'static str = "Cauchy";

    /// Create a new Cauchy distribution
    ///
    /// # Errors
    ///
    /// Fails if `width <= 0` or either parameter is not finite.
    pub fn new(center: f64, width: f64) -> DistResult<Self> {
        check_finite(Self::NAME, "center", center)?;
        check_positive(Self::NAME, "width", width)?;
        Ok(Self { center, width })
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl ContinuousDistribution for Cauchy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        ((x - self.center) / self.width).atan() / PI + 0.5
    }

    #[inline]
    fn quantile(&self, p: f64) -> DistResult<f64> {
        check_probability(p)?;
        // tan(±π/2) is finite in floating point; the limits are exact infinities
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.center + self.width * (PI * (p - 0.5)).tan())
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.width;
        -(PI * self.width).ln() - z.mul_add(z, 1.0).ln()
    }
}
