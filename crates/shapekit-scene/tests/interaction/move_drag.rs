use shapekit_scene::{HandleId, Interaction, InteractionController, PointerEvent, Scene, Vec2};

fn square() -> Vec<Vec2> {
    vec![
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
    ]
}

#[test]
fn test_move_drag_follows_cursor() {
    let mut scene = Scene::new();
    let root = scene.root();
    let group = scene.add_group(root, "g").unwrap();
    scene.set_rotation_degrees(group, 90.0).unwrap();
    let shape = scene.add_shape(group, "s", square()).unwrap();

    let mut controller = InteractionController::new();
    controller.bind(Interaction::moving(HandleId(3), shape));
    controller
        .pointer_down(&mut scene, &PointerEvent::on(HandleId(3), Vec2::zero()))
        .unwrap();
    for step in 1..=5 {
        let cursor = Vec2::new(step as f64, -(step as f64));
        controller
            .pointer_move(&mut scene, &PointerEvent::at(cursor))
            .unwrap();
        assert!(scene
            .world_position(shape)
            .unwrap()
            .approx_eq(cursor, 1e-12));
    }
    controller.pointer_up(&PointerEvent::at(Vec2::zero())).unwrap();

    let corners = scene.world_space_bbox_corners(shape).unwrap().unwrap();
    let center = corners[0].midpoint(corners[2]);
    assert!(center.approx_eq(Vec2::new(5.0, -5.0), 1e-12));
}

#[test]
fn test_anchor_drag_keeps_geometry() {
    let mut scene = Scene::new();
    let root = scene.root();
    let shape = scene.add_shape(root, "s", square()).unwrap();
    let before = scene.vertices(shape).unwrap();

    let mut drag = Interaction::anchor(HandleId(9), shape);
    drag.drag_start(&mut scene, &PointerEvent::on(HandleId(9), Vec2::zero()))
        .unwrap();
    drag.drag_move(&mut scene, &PointerEvent::at(Vec2::new(0.5, 0.75)))
        .unwrap();
    drag.drag_end().unwrap();

    assert_eq!(scene.vertices(shape).unwrap(), before);
    assert!(scene
        .world_position(shape)
        .unwrap()
        .approx_eq(Vec2::new(0.5, 0.75), 1e-12));
}

#[test]
fn test_pointer_down_elsewhere_starts_nothing() {
    let mut scene = Scene::new();
    let root = scene.root();
    let shape = scene.add_shape(root, "s", square()).unwrap();

    let mut controller = InteractionController::new();
    controller.bind(Interaction::moving(HandleId(1), shape));
    let started = controller
        .pointer_down(&mut scene, &PointerEvent::at(Vec2::zero()))
        .unwrap();
    assert_eq!(started, 0);

    controller
        .pointer_move(&mut scene, &PointerEvent::at(Vec2::new(9.0, 9.0)))
        .unwrap();
    assert_eq!(scene.node(shape).unwrap().position(), Vec2::zero());
}
