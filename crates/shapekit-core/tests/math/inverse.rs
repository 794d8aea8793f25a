use proptest::prelude::*;
use shapekit_core::{Mat3, MathError, Vec2};

#[test]
fn test_zero_scale_is_singular() {
    let m = Mat3::from_properties(
        Vec2::new(3.0, 4.0),
        0.3,
        Vec2::new(1.0, 0.0),
        Vec2::zero(),
    );
    assert!(matches!(
        m.try_inverse(),
        Err(MathError::SingularMatrix { .. })
    ));
}

#[test]
fn test_translation_inverse() {
    let m = Mat3::translation(Vec2::new(2.0, -3.0));
    let inv = m.try_inverse().unwrap();
    assert!(inv
        .apply_to_point(Vec2::new(2.0, -3.0))
        .approx_eq(Vec2::zero(), 1e-12));
}

proptest! {
    #[test]
    fn prop_inverse_undoes_point_transform(
        rotation in -3.0f64..3.0,
        sx in 0.1f64..10.0,
        sy in -10.0f64..-0.1,
        tx in -100.0f64..100.0,
        ty in -100.0f64..100.0,
        x in -100.0f64..100.0,
        y in -100.0f64..100.0,
    ) {
        let m = Mat3::from_properties(Vec2::new(tx, ty), rotation, Vec2::new(sx, sy), Vec2::zero());
        let inv = m.try_inverse().unwrap();
        let p = Vec2::new(x, y);
        prop_assert!(inv.apply_to_point(m.apply_to_point(p)).approx_eq(p, 1e-7));
    }
}
