use proptest::prelude::*;
use shapekit_scene::{Scene, Vec2};

proptest! {
    #[test]
    fn prop_subtree_box_contains_descendant_vertices(
        offsets in prop::collection::vec((-20.0f64..20.0, -20.0f64..20.0, -3.0f64..3.0, 0.2f64..3.0), 1..5),
    ) {
        let mut scene = Scene::new();
        let root = scene.root();
        let top = scene.add_group(root, "top").unwrap();
        scene.set_rotation(top, 0.4).unwrap();

        // A chain of shapes, each nested under the previous one
        let mut parent = top;
        for (i, (x, y, r, s)) in offsets.iter().enumerate() {
            let id = scene
                .add_shape(
                    parent,
                    &format!("s{}", i),
                    vec![Vec2::new(-1.0, 0.0), Vec2::new(2.0, 0.5), Vec2::new(0.0, 3.0)],
                )
                .unwrap();
            scene.set_position(id, Vec2::new(*x, *y)).unwrap();
            scene.set_rotation(id, *r).unwrap();
            scene.set_uniform_scale(id, *s).unwrap();
            parent = id;
        }

        let [min, _, max, _] = scene
            .child_tree_object_space_bounding_box(top)
            .unwrap()
            .unwrap();
        let to_top = scene.world_to_object_matrix(top).unwrap();
        for id in scene.subtree(top).unwrap() {
            for p in scene.vertices(id).unwrap() {
                let local = to_top.apply_to_point(p);
                prop_assert!(local.x >= min.x - 1e-6 && local.x <= max.x + 1e-6);
                prop_assert!(local.y >= min.y - 1e-6 && local.y <= max.y + 1e-6);
            }
        }
    }
}

#[test]
fn test_bounding_box_corners_are_canonical() {
    let mut scene = Scene::new();
    let root = scene.root();
    let shape = scene
        .add_shape(
            root,
            "s",
            vec![Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(0.0, 0.0)],
        )
        .unwrap();
    let corners = scene
        .child_tree_object_space_bounding_box(shape)
        .unwrap()
        .unwrap();
    assert_eq!(
        corners,
        [
            Vec2::new(-2.0, -1.0),
            Vec2::new(3.0, -1.0),
            Vec2::new(3.0, 4.0),
            Vec2::new(-2.0, 4.0),
        ]
    );
}
