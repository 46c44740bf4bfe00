//! Correctly-rounded acceptance checks.

use fpcheck_common::{Direction, FlushMode};

use crate::bits::step_f32;

/// True when `candidate` is one of the (at most two) representable f32
/// values bracketing `reference`.
///
/// `reference` is the higher-precision oracle result. When it is exactly
/// representable the bracket is a single value; otherwise it is the pair of
/// adjacent f32s enclosing it, so any correctly-rounded implementation must
/// land on one of them regardless of its rounding direction. A reference
/// beyond the finite f32 range brackets to `{±MAX, ±inf}`; a NaN reference
/// accepts any NaN candidate.
///
/// `accept_flushed` additionally admits the flushed-to-zero forms of the
/// bracket values, for hardware running with flush-to-zero;
/// `accept_unflushed` admits the bracket values themselves. At least one
/// must be enabled.
pub fn correctly_rounded_f32(
    candidate: f32,
    reference: f64,
    accept_flushed: bool,
    accept_unflushed: bool,
) -> bool {
    assert!(
        accept_flushed || accept_unflushed,
        "at least one subnormal acceptance mode must be enabled"
    );

    if reference.is_nan() {
        return candidate.is_nan();
    }

    let nearest = reference as f32;
    let (low, high) = if f64::from(nearest) == reference {
        (nearest, nearest)
    } else if f64::from(nearest) > reference {
        (step_f32(nearest, Direction::Down), nearest)
    } else {
        (nearest, step_f32(nearest, Direction::Up))
    };

    let mut acceptable = false;
    if accept_unflushed {
        acceptable |= candidate == low || candidate == high;
    }
    if accept_flushed {
        let flush = FlushMode::FlushToZero;
        acceptable |= candidate == flush.apply_f32(low) || candidate == flush.apply_f32(high);
    }
    acceptable
}
