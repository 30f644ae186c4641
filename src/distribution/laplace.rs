//! Laplace (double exponential) distribution
//!
//! Sharply peaked at `center` with exponential tails on both sides. Useful as
//! a sparsity-favouring prior.

use super::{check_finite, check_positive, check_probability, ContinuousDistribution};
use crate::error::DistResult;

/// Laplace distribution with location `center` and scale `width`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    center: f64,
    width: f64,
}

impl Laplace {
    const NAME: &'static str = "Laplace";

    /// Create a new Laplace distribution
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

impl ContinuousDistribution for Laplace {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.width;
        if z < 0.0 {
            0.5 * z.exp()
        } else {
            1.0 - 0.5 * (-z).exp()
        }
    }

    #[inline]
    fn quantile(&self, p: f64) -> DistResult<f64> {
        check_probability(p)?;
        // ln(0) gives the signed infinities at p = 0 and p = 1
        if p < 0.5 {
            Ok(self.center + self.width * (2.0 * p).ln())
        } else {
            Ok(self.center - self.width * (2.0 * (1.0 - p)).ln())
        }
    }

    fn log_pdf(&self, x: f64) -> f64 {
        -(2.0 * self.width).ln() - (x - self.center).abs() / self.width
    }
}
