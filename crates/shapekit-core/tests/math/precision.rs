use shapekit_core::precision::{clamp_tiny, signed_tiny, DEFAULT_TINY_MAGNITUDE};

#[test]
fn test_denominator_never_zero() {
    for value in [0.0, -0.0, 1e-300, -1e-300, 1e-7] {
        let clamped = signed_tiny(value, DEFAULT_TINY_MAGNITUDE);
        assert!(clamped.abs() >= DEFAULT_TINY_MAGNITUDE);
        assert!((1.0 / clamped).is_finite());
    }
}

#[test]
fn test_clamp_preserves_sign() {
    assert!(clamp_tiny(-1e-12, DEFAULT_TINY_MAGNITUDE, "test") < 0.0);
    assert!(clamp_tiny(1e-12, DEFAULT_TINY_MAGNITUDE, "test") > 0.0);
}
