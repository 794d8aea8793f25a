use proptest::prelude::*;
use shapekit_scene::{NodeId, Scene, Vec2};

fn assert_points_eq(a: &[Vec2], b: &[Vec2], tolerance: f64) {
    assert_eq!(a.len(), b.len());
    for (p, q) in a.iter().zip(b) {
        assert!(p.approx_eq(*q, tolerance), "{} != {}", p, q);
    }
}

fn world_vertices(scene: &Scene, id: NodeId) -> Vec<Vec<Vec2>> {
    scene
        .subtree(id)
        .unwrap()
        .into_iter()
        .map(|n| scene.vertices(n).unwrap())
        .collect()
}

fn triangle(x: f64, y: f64) -> Vec<Vec2> {
    vec![
        Vec2::new(x, y),
        Vec2::new(x + 2.0, y),
        Vec2::new(x + 1.0, y + 3.0),
    ]
}

/// Root with two transformed groups A and B and a shape N (with a child)
/// under A.
fn build(
    a_props: (f64, f64, f64, f64),
    b_props: (f64, f64, f64, f64),
    n_props: (f64, f64, f64, f64),
) -> (Scene, NodeId, NodeId, NodeId) {
    let mut scene = Scene::new();
    let root = scene.root();
    let a = scene.add_group(root, "A").unwrap();
    let b = scene.add_group(root, "B").unwrap();
    let n = scene.add_shape(a, "N", triangle(0.0, 0.0)).unwrap();
    scene.add_shape(n, "N child", triangle(4.0, 1.0)).unwrap();

    for (id, (x, y, r, s)) in [(a, a_props), (b, b_props), (n, n_props)] {
        scene.set_position(id, Vec2::new(x, y)).unwrap();
        scene.set_rotation(id, r).unwrap();
        scene.set_uniform_scale(id, s).unwrap();
    }
    (scene, a, b, n)
}

fn props() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (-50.0f64..50.0, -50.0f64..50.0, -3.0f64..3.0, 0.25f64..4.0)
}

proptest! {
    #[test]
    fn prop_reparent_is_a_visual_no_op(a in props(), b in props(), n in props()) {
        let (mut scene, a_id, b_id, n_id) = build(a, b, n);
        let before = world_vertices(&scene, n_id);

        scene.remove_from_parent(n_id).unwrap();
        scene.attach_to_new_parent(n_id, a_id).unwrap();
        scene.reparent(n_id, b_id).unwrap();

        prop_assert_eq!(scene.parent(n_id).unwrap(), Some(b_id));
        let after = world_vertices(&scene, n_id);
        for (x, y) in before.iter().zip(&after) {
            assert_points_eq(x, y, 1e-6);
        }
    }

    #[test]
    fn prop_group_ungroup_round_trip(a in props(), n in props()) {
        let (mut scene, a_id, b_id, n_id) = build(a, (0.0, 0.0, 0.0, 1.0), n);
        scene.reparent(b_id, a_id).unwrap();
        let children = scene.children(a_id).unwrap().to_vec();
        let before = world_vertices(&scene, a_id);

        let group = scene.group_children(a_id).unwrap();
        prop_assert_eq!(scene.children(a_id).unwrap(), &[group]);
        scene.ungroup_children(group).unwrap();

        prop_assert!(!scene.contains(group));
        prop_assert_eq!(scene.children(a_id).unwrap(), children.as_slice());
        prop_assert!(scene.contains(n_id));
        let after = world_vertices(&scene, a_id);
        for (x, y) in before.iter().zip(&after) {
            assert_points_eq(x, y, 1e-6);
        }
    }
}

#[test]
fn test_rejected_edits_leave_tree_untouched() {
    let (mut scene, a, _b, n) = build(
        (1.0, 2.0, 0.3, 1.5),
        (0.0, 0.0, 0.0, 1.0),
        (4.0, 0.0, 0.0, 1.0),
    );
    let child = scene.children(n).unwrap()[0];
    let snapshot = scene.to_document("before").unwrap().root;

    assert!(scene.reparent(a, child).unwrap_err().is_structural());
    assert!(scene.reparent(scene.root(), a).unwrap_err().is_structural());
    assert!(scene.ungroup_children(scene.root()).unwrap_err().is_structural());
    assert!(scene.attach_to_new_parent(n, a).unwrap_err().is_structural());

    assert_eq!(scene.to_document("after").unwrap().root, snapshot);
}

#[test]
fn test_recenter_keeps_geometry_and_moves_pivot() {
    let (mut scene, a, _b, _n) = build(
        (3.0, 3.0, 0.5, 2.0),
        (0.0, 0.0, 0.0, 1.0),
        (1.0, 1.0, 0.2, 1.0),
    );
    let before = world_vertices(&scene, a);

    scene.recenter_anchor_in_subtree(a).unwrap();

    let corners = scene.child_tree_world_space_bounding_box(a).unwrap().unwrap();
    let center = corners[0].midpoint(corners[2]);
    assert!(scene.world_position(a).unwrap().approx_eq(center, 1e-9));
    for (x, y) in before.iter().zip(&world_vertices(&scene, a)) {
        assert_points_eq(x, y, 1e-9);
    }
}
