//! Algorithm R: uniform reservoir sampling.

use rand::Rng;
use tracing::trace;

use crate::{ReservoirSampler, error::SampleError};

/// Uniform reservoir sampler: keeps `k` items, each with probability `k / n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformReservoir {
    k: usize,
}

impl UniformReservoir {
    pub const fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sample `min(k, items.len())` items in one pass.
    ///
    /// If `k >= items.len()` the whole input is returned in order and the
    /// rng is never touched.
    ///
    /// # Complexity
    /// O(n) time, O(k) space.
    pub fn sample<T: Clone, R: Rng + ?Sized>(&self, items: &[T], rng: &mut R) -> Vec<T> {
        let (k, n) = (self.k, items.len());
        if k == 0 {
            return Vec::new();
        }
        if k > n {
            trace!(k, n, "sample larger than input, returning input");
            return items.to_vec();
        }

        let mut reservoir = items[..k].to_vec();
        let mut replaced = 0usize;
        for (i, item) in items.iter().enumerate().skip(k) {
            let j = rng.random_range(0..=i);
            if j < k {
                reservoir[j] = item.clone();
                replaced += 1;
            }
        }

        trace!(k, n, replaced, "uniform reservoir sampled");
        reservoir
    }
}

impl<T: Clone> ReservoirSampler<T> for UniformReservoir {
    #[inline]
    fn k(&self) -> usize {
        self.k
    }

    #[inline]
    fn sample<R: Rng + ?Sized>(&self, items: &[T], rng: &mut R) -> Result<Vec<T>, SampleError> {
        // call the inherent method explicitly to avoid trait-recursion
        Ok(UniformReservoir::sample(self, items, rng))
    }
}
