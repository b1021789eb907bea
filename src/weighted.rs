//! Weighted records for [`ChaoReservoir`](crate::ChaoReservoir).

use crate::error::SampleError;

/// Anything that carries a non-negative sampling weight.
///
/// Implemented for [`WeightedItem`], `(T, f64)` pairs and references to
/// either. User structs can derive it with `#[derive(Weighted)]` and a
/// `#[weight]` field.
///
/// The derive only accepts structs:
///
/// ```compile_fail
/// use reservoirs::Weighted;
///
/// #[derive(Weighted)]
/// enum Tier {
///     Common,
///     Rare,
/// }
/// ```
///
/// with exactly one field marked `#[weight]`:
///
/// ```compile_fail
/// use reservoirs::Weighted;
///
/// #[derive(Weighted)]
/// struct Hit {
///     id: u32,
///     score: f64,
/// }
/// ```
///
/// ```compile_fail
/// use reservoirs::Weighted;
///
/// #[derive(Weighted)]
/// struct Hit {
///     #[weight]
///     score: f64,
///     #[weight]
///     boost: f64,
/// }
/// ```
///
/// and the marker takes no arguments:
///
/// ```compile_fail
/// use reservoirs::Weighted;
///
/// #[derive(Weighted)]
/// struct Hit {
///     #[weight(2)]
///     score: f64,
/// }
/// ```
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// A value paired with its sampling weight.
///
/// The sampler copies whole records into the sample, so the weight a value
/// was selected with travels with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedItem<T> {
    pub value: T,
    pub weight: f64,
}

impl<T> WeightedItem<T> {
    pub const fn new(value: T, weight: f64) -> Self {
        Self { value, weight }
    }

    /// Drop the weight and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> From<(T, f64)> for WeightedItem<T> {
    fn from((value, weight): (T, f64)) -> Self {
        Self { value, weight }
    }
}

impl<T> Weighted for WeightedItem<T> {
    #[inline]
    fn weight(&self) -> f64 {
        self.weight
    }
}

impl<T> Weighted for (T, f64) {
    #[inline]
    fn weight(&self) -> f64 {
        self.1
    }
}

impl<W: Weighted + ?Sized> Weighted for &W {
    #[inline]
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Check every weight before anything is sampled.
///
/// # Errors
/// * [`SampleError::NonFiniteWeight`] for the first NaN or infinite weight.
/// * [`SampleError::NegativeWeight`] for the first weight below zero.
pub fn validate_weights<W: Weighted>(items: &[W]) -> Result<(), SampleError> {
    for (index, item) in items.iter().enumerate() {
        let value = item.weight();
        if !value.is_finite() {
            return Err(SampleError::NonFiniteWeight { index, value });
        }
        if value < 0.0 {
            return Err(SampleError::NegativeWeight { index, value });
        }
    }
    Ok(())
}
