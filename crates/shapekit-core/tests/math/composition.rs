use shapekit_core::{Mat3, Vec2};
use std::f64::consts::PI;

#[test]
fn test_identity_properties() {
    let m = Mat3::from_properties(Vec2::zero(), 0.0, Vec2::new(1.0, 1.0), Vec2::zero());
    assert!(m.approx_eq(&Mat3::identity(), 1e-12));
}

#[test]
fn test_properties_compose_in_order() {
    let m = Mat3::from_properties(
        Vec2::new(10.0, 0.0),
        PI / 2.0,
        Vec2::new(2.0, 1.0),
        Vec2::new(1.0, 0.0),
    );
    // (0,0) -> anchor (1,0) -> scale (2,0) -> rotate (0,2) -> translate (10,2)
    let p = m.apply_to_point(Vec2::zero());
    assert!(p.approx_eq(Vec2::new(10.0, 2.0), 1e-12));
}
