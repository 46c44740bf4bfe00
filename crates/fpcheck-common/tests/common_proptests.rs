use fpcheck_common::FlushMode;
use proptest::prelude::*;

// ── FlushMode::apply_f32 invariants ─────────────────────────────────────────

proptest! {
    /// Flushing is idempotent: applying the policy twice equals applying it once.
    #[test]
    fn prop_flush_idempotent(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        let once = FlushMode::FlushToZero.apply_f32(v);
        let twice = FlushMode::FlushToZero.apply_f32(once);
        prop_assert_eq!(once.to_bits(), twice.to_bits());
    }

    /// Retain never changes the bit pattern.
    #[test]
    fn prop_retain_is_identity(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assert_eq!(FlushMode::Retain.apply_f32(v).to_bits(), bits);
    }

    /// Flushed output is never subnormal.
    #[test]
    fn prop_flush_output_never_subnormal(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assert!(!FlushMode::FlushToZero.apply_f32(v).is_subnormal());
    }

    /// Flushing preserves the sign bit.
    #[test]
    fn prop_flush_preserves_sign(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        let flushed = FlushMode::FlushToZero.apply_f32(v);
        prop_assert_eq!(flushed.is_sign_negative(), v.is_sign_negative());
    }
}
