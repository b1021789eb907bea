//! A-Chao weighted reservoir sampling.
//!
//! Every record is first given weight `w / k` in a running sum. A record
//! arriving after the reservoir is full is accepted with probability
//! `w / sum` and then replaces a uniformly chosen slot. The records that
//! fill the reservoir are kept unconditionally, so their inclusion odds do
//! not follow their weights; only the later records are weight-proportional.

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    ReservoirSampler,
    error::SampleError,
    weighted::{Weighted, validate_weights},
};

/// Weighted reservoir sampler using A-Chao.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaoReservoir {
    k: usize,
}

impl ChaoReservoir {
    pub const fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sample `min(k, items.len())` records in one pass.
    ///
    /// Records are returned whole, weight included. Zero weights are valid,
    /// but a zero-weight record past the first `k` is practically never
    /// accepted: only a uniform draw of exactly `0.0` passes `u <= p`.
    ///
    /// # Errors
    /// * [`SampleError::NegativeWeight`] if any weight is below zero.
    /// * [`SampleError::NonFiniteWeight`] if any weight is NaN or infinite.
    ///
    /// All weights are checked before sampling starts.
    ///
    /// # Complexity
    /// O(n) time, O(k) space.
    pub fn sample<W, R>(&self, items: &[W], rng: &mut R) -> Result<Vec<W>, SampleError>
    where
        W: Weighted + Clone,
        R: Rng + ?Sized,
    {
        if let Err(e) = validate_weights(items) {
            debug!(error = %e, "rejecting weighted input");
            return Err(e);
        }

        let (k, n) = (self.k, items.len());
        if k == 0 {
            return Ok(Vec::new());
        }
        if k > n {
            trace!(k, n, "sample larger than input, returning input");
            return Ok(items.to_vec());
        }

        let kf = k as f64;
        let mut wsum = 0.0f64;
        let mut reservoir = Vec::with_capacity(k);
        for item in &items[..k] {
            wsum += item.weight() / kf;
            reservoir.push(item.clone());
        }

        let mut accepted = 0usize;
        for item in &items[k..] {
            let w = item.weight();
            wsum += w / kf;
            // NaN while every weight so far is zero; the comparison then fails
            let p = w / wsum;
            let u: f64 = rng.random();
            if u <= p {
                let slot = rng.random_range(0..k);
                reservoir[slot] = item.clone();
                accepted += 1;
            }
        }

        trace!(k, n, accepted, wsum, "a-chao reservoir sampled");
        Ok(reservoir)
    }
}

impl<W: Weighted + Clone> ReservoirSampler<W> for ChaoReservoir {
    #[inline]
    fn k(&self) -> usize {
        self.k
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, items: &[W], rng: &mut R) -> Result<Vec<W>, SampleError> {
        // call the inherent method explicitly to avoid trait-recursion
        ChaoReservoir::sample(self, items, rng)
    }
}
