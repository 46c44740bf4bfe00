//! Stepping to adjacent representable f32 values.

use fpcheck_common::{consts, Direction, FlushMode};

use crate::bits::step_f32;

/// Adjacent representable f32 in the given direction.
///
/// NaN propagates and infinities are fixed points. The input is first
/// subjected to the flush policy; stepping away from zero lands on the
/// smallest subnormal, or on the smallest normal when flushing. Subnormal
/// results are themselves flushed, so under [`FlushMode::FlushToZero`] the
/// output is never subnormal. Stepping up from `f32::MAX` yields `+inf`
/// (and symmetrically for `-f32::MAX`).
pub fn next_after_f32(v: f32, direction: Direction, flush: FlushMode) -> f32 {
    if v.is_nan() || v.is_infinite() {
        return v;
    }
    let v = flush.apply_f32(v);
    if v == 0.0 {
        let magnitude = if flush.flushes() {
            f32::MIN_POSITIVE
        } else {
            consts::F32_SUBNORMAL_MIN_POSITIVE
        };
        return match direction {
            Direction::Up => magnitude,
            Direction::Down => -magnitude,
        };
    }
    flush.apply_f32(step_f32(v, direction))
}
