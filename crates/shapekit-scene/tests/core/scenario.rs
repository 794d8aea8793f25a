use shapekit_scene::{Scene, Vec2};

fn unit_square() -> Vec<Vec2> {
    vec![
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ]
}

#[test]
fn test_move_square_to_five_five() {
    let mut scene = Scene::new();
    let root = scene.root();
    let square = scene.add_shape(root, "square", unit_square()).unwrap();

    scene
        .move_to_world_position(square, Vec2::new(5.0, 5.0))
        .unwrap();

    let corners = scene.world_space_bbox_corners(square).unwrap().unwrap();
    let centroid = corners
        .iter()
        .fold(Vec2::zero(), |acc, p| acc + *p)
        * 0.25;
    assert!(centroid.approx_eq(Vec2::new(5.0, 5.0), 1e-12));
    assert!((corners[0].distance_to(corners[1]) - 2.0).abs() < 1e-12);
    assert!((corners[1].distance_to(corners[2]) - 2.0).abs() < 1e-12);

    let vertices = scene.vertices(square).unwrap();
    for (world, object) in vertices.iter().zip(unit_square()) {
        assert!(world.approx_eq(object + Vec2::new(5.0, 5.0), 1e-12));
    }
}

#[test]
fn test_set_world_position_only_moves_the_anchor() {
    let mut scene = Scene::new();
    let root = scene.root();
    let square = scene.add_shape(root, "square", unit_square()).unwrap();

    scene.set_world_position(square, Vec2::new(5.0, 5.0)).unwrap();

    assert_eq!(scene.vertices(square).unwrap(), unit_square());
    let node = scene.node(square).unwrap();
    assert_eq!(node.position(), Vec2::new(5.0, 5.0));
    assert!(node.anchor_shift().approx_eq(Vec2::new(-5.0, -5.0), 1e-12));
}
