// crates/domain/src/proximity.rs
//! Proximity predicates over an unordered `(start, end)` range.
//!
//! Each function answers where `value` sits relative to the interior, the
//! edges or the exterior of the range. The gate names are a mnemonic only:
//! `nand`, `nor` and `nxor` negate their partner inside the range and are
//! always `false` outside it.
//!
//! Two threshold interpretations coexist. [`and`] compares against an
//! absolute distance from the midpoint; every other predicate scales the
//! threshold by the range width.

use num_traits::Float;
use proximity_shared_kernel::Bounds;

/// Outside the range, but within `threshold * width` of it.
///
/// The lower band is bounded by `threshold * width - min`, not
/// `min - threshold * width`. Callers rely on this exact formula.
pub fn not<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    let bounds = Bounds::new(start, end);
    let (min, max) = (bounds.min(), bounds.max());

    if bounds.contains(value) {
        return false;
    }

    let threshold_distance = bounds.scaled(threshold);
    let distance_from_top = max + threshold_distance;
    let distance_from_bottom = threshold_distance - min;

    (value > max && value < distance_from_top) || (value < min && value > distance_from_bottom)
}

/// Within `threshold` (absolute, unscaled) of the midpoint.
pub fn and<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    let basis = Bounds::new(start, end).midpoint();
    (value - basis).abs() <= threshold
}

/// Inside the range and not near the midpoint.
pub fn nand<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    if Bounds::new(start, end).excludes(value) {
        return false;
    }
    !and(start, end, value, threshold)
}

/// Inside the range and within the scaled band of either edge.
///
/// With `threshold >= 0.5` the two bands meet, so every interior value
/// qualifies.
pub fn or<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    let bounds = Bounds::new(start, end);
    if bounds.excludes(value) {
        return false;
    }

    let threshold_distance = bounds.scaled(threshold);
    let distance_from_top = bounds.max() - threshold_distance;
    let distance_from_bottom = threshold_distance + bounds.min();

    value >= distance_from_top || value <= distance_from_bottom
}

/// Inside the range and away from both edges.
pub fn nor<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    if Bounds::new(start, end).excludes(value) {
        return false;
    }
    !or(start, end, value, threshold)
}

/// Near exactly one edge. No interior check: values outside the range
/// still count as near the edge they lie beyond.
pub fn xor<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    let bounds = Bounds::new(start, end);

    let threshold_distance = bounds.scaled(threshold);
    let distance_from_top = bounds.max() - threshold_distance;
    let distance_from_bottom = threshold_distance + bounds.min();

    let is_close_to_top = value >= distance_from_top;
    let is_close_to_bottom = value <= distance_from_bottom;

    is_close_to_top != is_close_to_bottom
}

/// Inside the range and near both edges or neither.
pub fn nxor<T: Float>(start: T, end: T, value: T, threshold: T) -> bool {
    if Bounds::new(start, end).excludes(value) {
        return false;
    }
    !xor(start, end, value, threshold)
}
