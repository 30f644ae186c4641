//! Pareto distribution
//!
//! Power-law tail above a minimum value. The shape `alpha` controls how
//! heavy the tail is: smaller `alpha` puts more mass far above `min`.
//!
//! # Parameters
//!
//! - **min**: lower bound of the support (must be > 0)
//! - **alpha**: tail index (must be > 0)
//!
//! # Example
//!
//! ```
//! use nestkit::distribution::{ContinuousDistribution, pareto::Pareto};
//!
//! let prior = Pareto::new(1.0, 2.0).unwrap();
//! assert_eq!(prior.quantile(0.0).unwrap(), 1.0);
//! assert!((prior.quantile(0.75).unwrap() - 2.0).abs() < 1e-12);
//! ```

use super::{check_positive, check_probability, ContinuousDistribution};
use crate::error::DistResult;

/// Pareto (type I) distribution on `[min, inf)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pareto {
    min: f64,
    alpha: f64,
}

impl Pareto {
    const NAME: &'static str = "Pareto";

    /// Create a new Pareto distribution
    ///
    /// # Errors
    ///
    /// Fails unless both `min` and `alpha` are finite and > 0.
    pub fn new(min: f64, alpha: f64) -> DistResult<Self> {
        check_positive(Self::NAME, "min", min)?;
        check_positive(Self::NAME, "alpha", alpha)?;
        Ok(Self { min, alpha })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl ContinuousDistribution for Pareto {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x <= self.min {
            0.0
        } else {
            1.0 - (self.min / x).powf(self.alpha)
        }
    }

    #[inline]
    fn quantile(&self, p: f64) -> DistResult<f64> {
        check_probability(p)?;
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.min * (1.0 - p).powf(-1.0 / self.alpha))
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < self.min {
            f64::NEG_INFINITY
        } else {
            self.alpha.ln() + self.alpha * self.min.ln() - (self.alpha + 1.0) * x.ln()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        let dist = Pareto::new(1.0, 2.0).unwrap();
        assert_eq!(dist.cdf(0.5), 0.0);
        assert_eq!(dist.cdf(1.0), 0.0);
        assert_relative_eq!(dist.cdf(2.0), 0.75, epsilon = 1e-12);
        assert_relative_eq!(dist.quantile(0.75).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_params() {
        assert!(Pareto::new(0.0, 1.0).is_err());
        assert!(Pareto::new(1.0, 0.0).is_err());
        assert!(Pareto::new(-1.0, 2.0).is_err());
        assert!(Pareto::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_quantile_endpoints() {
        let dist = Pareto::new(3.0, 1.5).unwrap();
        assert_eq!(dist.quantile(0.0).unwrap(), 3.0);
        assert_eq!(dist.quantile(1.0).unwrap(), f64::INFINITY);
        assert!(dist.quantile(-0.0001).is_err());
        assert!(dist.quantile(1.0001).is_err());
    }

    #[test]
    fn test_round_trip() {
        let dist = Pareto::new(0.5, 3.0).unwrap();
        for i in 1..200 {
            let x = 0.5 + i as f64 * 0.01;
            assert_relative_eq!(dist.quantile(dist.cdf(x)).unwrap(), x, max_relative = 1e-9);
        }
        for i in 1..100 {
            let p = i as f64 / 100.0;
            assert_relative_eq!(dist.cdf(dist.quantile(p).unwrap()), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_monotone() {
        let dist = Pareto::new(2.0, 1.2).unwrap();
        let mut prev = dist.cdf(0.0);
        assert_eq!(prev, 0.0);
        for i in 0..=1000 {
            let c = dist.cdf(i as f64 * 0.1);
            assert!(c >= prev);
            assert!((0.0..=1.0).contains(&c));
            prev = c;
        }
        assert_eq!(dist.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_log_pdf() {
        let dist = Pareto::new(1.0, 2.0).unwrap();
        // pdf(x) = alpha * min^alpha / x^(alpha + 1)
        assert_relative_eq!(dist.log_pdf(1.0), 2f64.ln(), epsilon = 1e-12);
        assert_relative_eq!(dist.log_pdf(2.0), 2f64.ln() - 3.0 * 2f64.ln(), epsilon = 1e-12);
        assert_eq!(dist.log_pdf(0.9), f64::NEG_INFINITY);
    }
}
