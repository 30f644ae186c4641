//! Exponential distribution
//!
//! One-sided distribution on `[0, inf)`, a common prior for rates and scale
//! parameters.

use super::{check_positive, check_probability, ContinuousDistribution};
use crate::error::DistResult;

/// Exponential distribution with mean `scale`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    scale: f64,
}

impl Exponential {
    const NAME: &'static str = "Exponential";

    /// Create a new exponential distribution; `scale` must be finite and > 0
    pub fn new(scale: f64) -> DistResult<Self> {
        check_positive(Self::NAME, "scale", scale)?;
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl ContinuousDistribution for Exponential {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            -(-x / self.scale).exp_m1()
        }
    }

    #[inline]
    fn quantile(&self, p: f64) -> DistResult<f64> {
        check_probability(p)?;
        // ln_1p(-1) = -inf, so p = 1 maps to +inf
        Ok(-self.scale * (-p).ln_1p())
    }

    fn log_pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            f64::NEG_INFINITY
        } else {
            -self.scale.ln() - x / self.scale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_known_values() {
        let dist = Exponential::new(2.0).unwrap();
        assert_eq!(dist.cdf(-1.0), 0.0);
        assert_eq!(dist.cdf(0.0), 0.0);
        assert_relative_eq!(dist.cdf(2.0), 1.0 - (-1f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(dist.quantile(0.5).unwrap(), 2.0 * 2f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_scale() {
        assert!(Exponential::new(0.0).is_err());
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_quantile_endpoints() {
        let dist = Exponential::new(1.0).unwrap();
        assert_eq!(dist.quantile(0.0).unwrap(), 0.0);
        assert_eq!(dist.quantile(1.0).unwrap(), f64::INFINITY);
        assert!(dist.quantile(-0.0001).is_err());
        assert!(dist.quantile(1.0001).is_err());
    }

    #[test]
    fn test_round_trip() {
        let dist = Exponential::new(0.7).unwrap();
        for i in 1..200 {
            let x = i as f64 * 0.05;
            assert_relative_eq!(dist.quantile(dist.cdf(x)).unwrap(), x, max_relative = 1e-9);
        }
        for i in 1..100 {
            let p = i as f64 / 100.0;
            assert_relative_eq!(dist.cdf(dist.quantile(p).unwrap()), p, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cdf_monotone() {
        let dist = Exponential::new(1.5).unwrap();
        let mut prev = dist.cdf(-10.0);
        assert_eq!(prev, 0.0);
        for i in -100..=1000 {
            let c = dist.cdf(i as f64 * 0.05);
            assert!(c >= prev);
            assert!((0.0..=1.0).contains(&c));
            prev = c;
        }
        assert_eq!(dist.cdf(f64::INFINITY), 1.0);
    }

    #[test]
    fn test_log_pdf() {
        let dist = Exponential::new(2.0).unwrap();
        assert_relative_eq!(dist.log_pdf(0.0), -(2f64.ln()), epsilon = 1e-12);
        assert_relative_eq!(dist.log_pdf(4.0), -(2f64.ln()) - 2.0, epsilon = 1e-12);
        assert_eq!(dist.log_pdf(-0.5), f64::NEG_INFINITY);
    }
}
