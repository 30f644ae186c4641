//! Sampler random number generation
//!
//! Each worker thread owns its own [`SamplerRng`], seeded from the resolved
//! run options. The generator is xoshiro256++, which is fast and has good
//! statistical properties; it is called several times per proposal.
//!
//! # Example
//!
//! ```
//! use nestkit::rng::{self, randh};
//!
//! let mut rng = rng::seeded(42);
//! let step = randh(&mut rng);
//! assert!(step.is_finite());
//! ```

use rand::Rng;
use rand::SeedableRng;
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random number generator used by the sampler
pub type SamplerRng = Xoshiro256PlusPlus;

/// Create a sampler RNG from a resolved seed
pub fn seeded(seed: u64) -> SamplerRng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

/// Derive an independent per-worker RNG from the run seed
///
/// Worker `index` gets the stream after `index` long jumps (2^192 steps each),
/// so streams never overlap.
pub fn for_worker(seed: u64, index: usize) -> SamplerRng {
    let mut rng = seeded(seed);
    for _ in 0..index {
        rng.long_jump();
    }
    rng
}

/// Heavy-tailed random step
///
/// Returns `10^(1.5 - 3|t|) * n` where `t` is Student-t with two degrees of
/// freedom and `n` is standard normal. The magnitude spans many orders, so a
/// proposal built on it mixes tiny local moves with occasional jumps across
/// the whole unit interval.
pub fn randh<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let n1: f64 = rng.sample(StandardNormal);
    let u: f64 = rng.gen();
    let t = n1 / (-u.ln()).sqrt();
    let n: f64 = rng.sample(StandardNormal);
    10f64.powf(1.5 - 3.0 * t.abs()) * n
}

/// Wrap `x` periodically into `[min, max)`
pub fn wrap(x: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    let wrapped = (x - min).rem_euclid(span) + min;
    // rem_euclid can round up to exactly `span` for tiny negative inputs
    if wrapped >= max {
        min
    } else {
        wrapped
    }
}
