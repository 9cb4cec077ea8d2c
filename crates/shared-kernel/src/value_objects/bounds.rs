// crates/shared-kernel/src/value_objects/bounds.rs
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Closed interval `[min, max]` built from an unordered `(start, end)` pair.
///
/// Construction never fails and never validates: a degenerate pair yields a
/// zero-width interval, and non-finite endpoints flow through IEEE-754
/// comparisons unchanged.
///
/// Deserialization goes through [`Bounds::new`], so a payload with the
/// fields swapped still yields `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBounds<T>", bound(deserialize = "T: Float + Deserialize<'de>"))]
pub struct Bounds<T> {
    min: T,
    max: T,
}

#[derive(Deserialize)]
struct RawBounds<T> {
    min: T,
    max: T,
}

impl<T> Bounds<T>
where
    T: Float,
{
    /// Sorts the pair so that `min` comes first.
    ///
    /// Only a strict `start < end` keeps the given order; every other case
    /// (equal or NaN endpoints included) swaps.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        if start < end { Self { min: start, max: end } } else { Self { min: end, max: start } }
    }

    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// `max - min`.
    #[inline]
    pub fn width(&self) -> T {
        self.max - self.min
    }

    /// The basis point `(min + max) / 2`.
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.min + self.max) / (T::one() + T::one())
    }

    /// Threshold distance: `threshold * width`.
    #[inline]
    pub fn scaled(&self, threshold: T) -> T {
        threshold * self.width()
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Strictly below `min` or strictly above `max`.
    ///
    /// Not the negation of [`Bounds::contains`]: NaN is neither contained
    /// nor excluded.
    #[inline]
    pub fn excludes(&self, value: T) -> bool {
        value > self.max || value < self.min
    }
}

impl<T> From<RawBounds<T>> for Bounds<T>
where
    T: Float,
{
    fn from(raw: RawBounds<T>) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl<T> From<(T, T)> for Bounds<T>
where
    T: Float,
{
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}
