//! ULP distance and ULP magnitude.

use std::fmt;

use fpcheck_common::{Direction, FlushMode};

use crate::bits::ordered_index_f32;
use crate::next::next_after_f32;

/// Distance between two values, measured in representable steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UlpDistance {
    Finite(u64),
    /// At least one input was NaN or infinite, where neighbour counts are
    /// meaningless.
    Infinite,
}

impl UlpDistance {
    /// True when the distance is finite and no larger than `limit`.
    pub fn within(self, limit: u64) -> bool {
        matches!(self, UlpDistance::Finite(d) if d <= limit)
    }

    /// The step count, if finite.
    pub fn finite(self) -> Option<u64> {
        match self {
            UlpDistance::Finite(d) => Some(d),
            UlpDistance::Infinite => None,
        }
    }
}

impl fmt::Display for UlpDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UlpDistance::Finite(d) => write!(f, "{d}"),
            UlpDistance::Infinite => write!(f, "infinite"),
        }
    }
}

/// Number of representable f32 values between `a` and `b`, treating
/// subnormals as equivalent to zero.
///
/// This is the distance as seen by flush-to-zero hardware; use
/// [`ulp_distance_f32_with`] to keep subnormals distinct.
pub fn ulp_distance_f32(a: f32, b: f32) -> UlpDistance {
    ulp_distance_f32_with(a, b, FlushMode::FlushToZero)
}

/// Number of representable f32 values between `a` and `b` under an explicit
/// subnormal policy. Non-finite inputs give an infinite distance.
pub fn ulp_distance_f32_with(a: f32, b: f32, flush: FlushMode) -> UlpDistance {
    if !a.is_finite() || !b.is_finite() {
        return UlpDistance::Infinite;
    }
    let a = flush.apply_f32(a);
    let b = flush.apply_f32(b);
    let distance = (ordered_index_f32(a) - ordered_index_f32(b)).unsigned_abs();
    UlpDistance::Finite(distance)
}

/// Gap between adjacent representable f32 values at `v`.
///
/// Converts ULP-denominated tolerances into absolute bounds. Under
/// [`FlushMode::FlushToZero`] the whole subnormal range collapses onto zero,
/// so the gap there is the smallest normal. At `f32::MAX` the downward gap
/// is reported, since the upward neighbour is infinite. NaN and infinity
/// propagate.
pub fn ulp_magnitude_f32(v: f32, flush: FlushMode) -> f32 {
    if v.is_nan() {
        return f32::NAN;
    }
    if v.is_infinite() {
        return f32::INFINITY;
    }
    let magnitude = flush.apply_f32(v.abs());
    if flush.flushes() && magnitude < f32::MIN_POSITIVE {
        return f32::MIN_POSITIVE;
    }
    let up = next_after_f32(magnitude, Direction::Up, flush);
    if up.is_finite() {
        up - magnitude
    } else {
        magnitude - next_after_f32(magnitude, Direction::Down, flush)
    }
}
