//! Continuous probability distributions
//!
//! This module provides closed-form continuous distributions used by the
//! sampler as priors and as proposal kernels. Every distribution exposes a
//! CDF and its inverse (the quantile function), and the two are kept exact
//! inverses of each other over the distribution's support.
//!
//! # Distributions
//!
//! - **Cauchy**: heavy-tailed, location/width
//! - **Uniform**: flat over a bounded interval
//! - **Laplace**: double exponential, location/width
//! - **Exponential**: one-sided, scale
//! - **Pareto**: power-law tail above a minimum
//!
//! # Prior Transform
//!
//! The sampler works in the unit hypercube. A point `u` in `[0, 1]` is mapped
//! into parameter space with `quantile(u)`, and a parameter value is mapped
//! back with `cdf(x)`. Proposal jumps are made in the unit coordinate, which
//! keeps them symmetric regardless of the prior's shape.
//!
//! # Example
//!
//! ```
//! use nestkit::distribution::{ContinuousDistribution, cauchy::Cauchy};
//!
//! let prior = Cauchy::new(0.0, 1.0).unwrap();
//! assert_eq!(prior.cdf(0.0), 0.5);
//! assert_eq!(prior.quantile(0.5).unwrap(), 0.0);
//! ```

use crate::error::{DistResult, DistributionError};
use crate::rng::{randh, wrap};
use rand::distributions::Open01;
use rand::{Rng, RngCore};

/// Continuous distribution with a closed-form CDF and quantile function
///
/// # Contract
///
/// - Parameters are validated by the constructor; an instance never exists
///   in an invalid state and is never mutated afterwards.
/// - `cdf` is total over the reals, non-decreasing, continuous, and returns
///   a value in `[0, 1]`.
/// - `quantile` accepts `p` in the closed interval `[0, 1]` and rejects
///   anything else (including NaN) with
///   [`DistributionError::ProbabilityOutOfRange`]. Unbounded ends of the
///   support map to signed infinities.
/// - `quantile(cdf(x)) == x` over the support and `cdf(quantile(p)) == p`
///   for `p` in `(0, 1)`, up to floating-point tolerance.
///
/// # Thread Safety
///
/// Implementations are immutable after construction and must be
/// `Send + Sync`, so a single instance can be queried from every worker
/// thread without locking.
///
/// The trait is object safe: the sampler may hold a heterogeneous
/// `Vec<Box<dyn ContinuousDistribution>>` of priors.
pub trait ContinuousDistribution: Send + Sync {
    /// Short human-readable name
    fn name(&self) -> &'static str;

    /// Cumulative distribution function, `P(X <= x)`
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function (inverse CDF)
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::ProbabilityOutOfRange`] if `p` is not in `[0, 1]`.
    fn quantile(&self, p: f64) -> DistResult<f64>;

    /// Log probability density at `x`, `-inf` outside the support
    fn log_pdf(&self, x: f64) -> f64;

    /// Prior transform: map a unit-interval coordinate into parameter space
    #[inline]
    fn prior_transform(&self, u: f64) -> DistResult<f64> {
        self.quantile(u)
    }

    /// Draw a value by applying the quantile function to a uniform variate
    ///
    /// The variate is drawn from the open interval `(0, 1)`, so unbounded
    /// distributions never return an infinity here.
    fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        let u: f64 = rng.sample(Open01);
        match self.quantile(u) {
            Ok(x) => x,
            Err(_) => unreachable!("uniform variate outside (0, 1)"),
        }
    }

    /// Propose a new value near `x`
    ///
    /// The move is made in the unit coordinate: `u = cdf(x)`, `u` is shifted
    /// by a heavy-tailed step and wrapped back into `[0, 1)`, then mapped
    /// through the quantile function. The move is symmetric in `u`, so the
    /// log Hastings ratio is zero.
    fn perturb(&self, x: f64, rng: &mut dyn RngCore) -> DistResult<f64> {
        let mut u = self.cdf(x);
        u += randh(rng);
        u = wrap(u, 0.0, 1.0);
        self.quantile(u)
    }
}

/// Validate a quantile argument
#[inline]
pub(crate) fn check_probability(p: f64) -> DistResult<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(DistributionError::ProbabilityOutOfRange(p))
    }
}

/// Validate that a parameter is finite
pub(crate) fn check_finite(distribution: &'static str, param: &str, value: f64) -> DistResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            distribution,
            format!("{} must be finite, got {}", param, value),
        ))
    }
}

/// Validate that a parameter is finite and strictly positive
pub(crate) fn check_positive(distribution: &'static str, param: &str, value: f64) -> DistResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            distribution,
            format!("{} must be finite and > 0, got {}", param, value),
        ))
    }
}

pub mod cauchy;
pub mod exponential;
pub mod laplace;
pub mod pareto;
pub mod uniform;

pub use cauchy::Cauchy;
pub use exponential::Exponential;
pub use laplace::Laplace;
pub use pareto::Pareto;
pub use uniform::Uniform;
