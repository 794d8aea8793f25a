use proptest::prelude::*;
use shapekit_scene::{Mat3, Scene, Vec2};

fn shape(scene: &mut Scene) -> shapekit_scene::NodeId {
    let root = scene.root();
    scene
        .add_shape(
            root,
            "s",
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
        )
        .unwrap()
}

proptest! {
    #[test]
    fn prop_set_matrix_and_position_recovers_properties(
        px in -100.0f64..100.0,
        py in -100.0f64..100.0,
        rotation in -3.0f64..3.0,
        sx in 0.1f64..10.0,
        sy in prop_oneof![0.1f64..10.0, -10.0f64..-0.1],
        ax in -50.0f64..50.0,
        ay in -50.0f64..50.0,
    ) {
        let mut scene = Scene::new();
        let id = shape(&mut scene);
        let position = Vec2::new(px, py);
        let matrix = Mat3::from_properties(position, rotation, Vec2::new(sx, sy), Vec2::new(ax, ay));

        scene.set_matrix_and_position(id, matrix, position).unwrap();

        let node = scene.node(id).unwrap();
        prop_assert_eq!(node.matrix(), matrix);
        prop_assert!((node.rotation() - rotation).abs() < 1e-9);
        prop_assert!(node.scale().approx_eq(Vec2::new(sx, sy), 1e-9));
        prop_assert!(node.anchor_shift().approx_eq(Vec2::new(ax, ay), 1e-6));
        prop_assert!(node.composed_matrix().approx_eq(&node.matrix(), 1e-6));
    }

    #[test]
    fn prop_kept_rotation_recovers_signed_scale(
        px in -100.0f64..100.0,
        py in -100.0f64..100.0,
        rotation in -3.0f64..3.0,
        sx in prop_oneof![0.1f64..10.0, -10.0f64..-0.1],
        sy in prop_oneof![0.1f64..10.0, -10.0f64..-0.1],
        ax in -50.0f64..50.0,
        ay in -50.0f64..50.0,
    ) {
        let mut scene = Scene::new();
        let id = shape(&mut scene);
        let position = Vec2::new(px, py);
        scene.set_position(id, position).unwrap();
        scene.set_rotation(id, rotation).unwrap();

        let matrix = Mat3::from_properties(position, rotation, Vec2::new(sx, sy), Vec2::new(ax, ay));
        scene.set_matrix_preserving_rotation(id, matrix).unwrap();
        scene.update_matrix_properties(id, false).unwrap();

        let node = scene.node(id).unwrap();
        prop_assert_eq!(node.rotation(), rotation);
        prop_assert_eq!(node.position(), position);
        prop_assert!(node.scale().approx_eq(Vec2::new(sx, sy), 1e-9));
        prop_assert!(node.anchor_shift().approx_eq(Vec2::new(ax, ay), 1e-6));
        prop_assert!(node.composed_matrix().approx_eq(&node.matrix(), 1e-6));
    }
}

#[test]
fn test_update_matrix_properties_is_stable() {
    let mut scene = Scene::new();
    let id = shape(&mut scene);
    scene.set_position(id, Vec2::new(3.0, 1.0)).unwrap();
    scene.set_rotation(id, 0.8).unwrap();
    scene.set_scale(id, Vec2::new(2.0, 3.0)).unwrap();
    scene.set_anchor_shift(id, Vec2::new(-1.0, 0.5)).unwrap();
    let before = scene.node(id).unwrap().transform_snapshot();

    scene.update_matrix_properties(id, true).unwrap();

    let node = scene.node(id).unwrap();
    assert_eq!(node.matrix(), before.matrix);
    assert!((node.rotation() - 0.8).abs() < 1e-12);
    assert!(node.scale().approx_eq(Vec2::new(2.0, 3.0), 1e-12));
    assert!(node.anchor_shift().approx_eq(Vec2::new(-1.0, 0.5), 1e-9));
}
