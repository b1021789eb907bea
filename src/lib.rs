//! # reservoirs
//!
//! Fixed-memory random samples from a sequence in a single pass.
//!
//! Two samplers are provided:
//!
//! 1. **Uniform** with [`UniformReservoir`] (Algorithm R): every item ends
//!    up in the sample with probability `k / n`.
//! 2. **Weighted** with [`ChaoReservoir`] (A-Chao): items are accepted
//!    against a running weighted sum, so heavier items are kept more often.
//!
//! Both take the input as a slice and the randomness source as any
//! [`rand::Rng`], so a seeded rng gives reproducible samples.
//!
//! ## Quick start (uniform)
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use reservoirs::UniformReservoir;
//!
//! let items: Vec<u32> = (0..1_000).collect();
//! let mut rng = StdRng::seed_from_u64(7);
//! let sample = UniformReservoir::new(10).sample(&items, &mut rng);
//! assert_eq!(sample.len(), 10);
//! ```
//!
//! ## Quick start (weighted)
//!
//! ```rust
//! use reservoirs::{ChaoReservoir, WeightedItem};
//!
//! # fn main() -> Result<(), reservoirs::SampleError> {
//! let items = [
//!     WeightedItem::new("common", 60.0),
//!     WeightedItem::new("uncommon", 30.0),
//!     WeightedItem::new("rare", 9.0),
//!     WeightedItem::new("legendary", 1.0),
//! ];
//! let mut rng = rand::rng();
//! let picked = ChaoReservoir::new(2).sample(&items, &mut rng)?;
//! assert_eq!(picked.len(), 2);
//! # Ok(()) }
//! ```
//!
//! ## Records with a derived weight
//!
//! ```rust
//! use reservoirs::{ChaoReservoir, Weighted};
//!
//! #[derive(Clone, Debug, Weighted)]
//! struct Request {
//!     path: &'static str,
//!     #[weight]
//!     bytes: u32,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let log = [
//!     Request { path: "/", bytes: 512 },
//!     Request { path: "/big", bytes: 40_960 },
//!     Request { path: "/small", bytes: 64 },
//! ];
//! let sample = ChaoReservoir::new(1).sample(&log, &mut rand::rng())?;
//! assert_eq!(sample.len(), 1);
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Time**: O(n), one pass over the input.
//! * **Space**: O(k), the reservoir never grows past `k`.
//!
//! ## Gotchas
//! * If `k >= n` the whole input is returned unchanged, in order.
//! * Weights must be **non-negative** and finite; NaN/∞ and negatives are
//!   rejected before sampling starts.
//! * A-Chao is an approximation. The first `k` records fill the reservoir
//!   unconditionally, so only later records are kept in proportion to
//!   their weights.
//! * The input must be a finite slice; there is no incremental
//!   unknown-length API.
//!
//! ## Logging
//! Each call emits `tracing` events at `trace` level (and `debug` for
//! rejected input). Install a subscriber to see them.

// lets the derive's `reservoirs::Weighted` path resolve inside this crate
extern crate self as reservoirs;

mod chao;
mod error;
mod uniform;
mod weighted;

pub use chao::ChaoReservoir;
pub use error::SampleError;
pub use uniform::UniformReservoir;
pub use weighted::{Weighted, WeightedItem, validate_weights};

/// Derive macro imported from `reservoirs_macros`.
/// See the crate-level example for usage.
pub use reservoirs_macros::Weighted;

use rand::Rng;

/// A minimal interface for reservoir samplers.
/// Implemented by `UniformReservoir` (equal odds) and `ChaoReservoir` (weighted).
pub trait ReservoirSampler<T> {
    /// Target sample size.
    fn k(&self) -> usize;

    /// Sample `min(k, items.len())` items from `items`.
    fn sample<R: Rng + ?Sized>(&self, items: &[T], rng: &mut R) -> Result<Vec<T>, SampleError>;
}

/// Uniform sample of `k` items; see [`UniformReservoir::sample`].
pub fn reservoir_sample<T, R>(items: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    UniformReservoir::new(k).sample(items, rng)
}

/// Weighted sample of `k` records; see [`ChaoReservoir::sample`].
///
/// # Errors
/// [`SampleError`] if any weight is negative or not finite.
pub fn weighted_reservoir_sample<W, R>(
    items: &[W],
    k: usize,
    rng: &mut R,
) -> Result<Vec<W>, SampleError>
where
    W: Weighted + Clone,
    R: Rng + ?Sized,
{
    ChaoReservoir::new(k).sample(items, rng)
}
