use shapekit_scene::{ChangeEvent, ChangeKind, Scene, Vec2};
use std::cell::RefCell;
use std::rc::Rc;

fn recorder(scene: &mut Scene, node: shapekit_scene::NodeId) -> Rc<RefCell<Vec<ChangeEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let log = events.clone();
    scene
        .subscribe(node, move |event| log.borrow_mut().push(event.clone()))
        .unwrap();
    events
}

#[test]
fn test_transform_setters_notify_properties() {
    let mut scene = Scene::new();
    let root = scene.root();
    let shape = scene.add_shape(root, "s", vec![Vec2::zero()]).unwrap();
    let events = recorder(&mut scene, shape);

    scene.set_rotation(shape, 1.0).unwrap();
    scene.set_world_position(shape, Vec2::new(2.0, 2.0)).unwrap();
    scene.set_vertices(shape, &[Vec2::new(1.0, 1.0)]).unwrap();

    let events = events.borrow();
    let kinds: Vec<ChangeKind> = events.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![ChangeKind::Properties, ChangeKind::Properties, ChangeKind::Vertices]
    );
    assert!(events[0].touches("rotation"));
    assert!(events[1].touches("anchor_shift"));
    assert!(events.iter().all(|e| e.node == shape));
}

#[test]
fn test_unsubscribed_listener_is_silent() {
    let mut scene = Scene::new();
    let root = scene.root();
    let shape = scene.add_shape(root, "s", vec![Vec2::zero()]).unwrap();
    let hits = Rc::new(RefCell::new(0));
    let h = hits.clone();
    let id = scene.subscribe(shape, move |_| *h.borrow_mut() += 1).unwrap();

    scene.set_uniform_scale(shape, 2.0).unwrap();
    assert!(scene.unsubscribe(shape, id));
    scene.set_uniform_scale(shape, 3.0).unwrap();

    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn test_reparent_notifies_old_and_new_parent() {
    let mut scene = Scene::new();
    let root = scene.root();
    let a = scene.add_group(root, "a").unwrap();
    let b = scene.add_group(root, "b").unwrap();
    let shape = scene.add_shape(a, "s", vec![Vec2::zero()]).unwrap();
    let a_events = recorder(&mut scene, a);
    let b_events = recorder(&mut scene, b);

    scene.reparent(shape, b).unwrap();

    assert_eq!(a_events.borrow().len(), 1);
    assert_eq!(a_events.borrow()[0].kind, ChangeKind::Structure);
    assert_eq!(b_events.borrow().len(), 1);
    assert!(b_events.borrow()[0].touches("children"));
}
