use shapekit_scene::{AttributeValue, NodeKind, Scene, SceneConfig, SceneDocument, Vec2};
use tempfile::TempDir;

fn sample_scene() -> Scene {
    let mut scene = Scene::new();
    let root = scene.root();
    let group = scene.add_group(root, "cluster").unwrap();
    scene.set_position(group, Vec2::new(4.0, -1.0)).unwrap();
    scene.set_rotation_degrees(group, 30.0).unwrap();
    let shape = scene
        .add_shape(
            group,
            "wedge",
            vec![Vec2::new(0.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 2.0)],
        )
        .unwrap();
    scene.set_scale(shape, Vec2::new(1.5, 0.5)).unwrap();
    scene.set_anchor_shift(shape, Vec2::new(-1.0, -0.5)).unwrap();
    scene.set_attribute(shape, "fill", "#336699").unwrap();
    scene.set_attribute(shape, "locked", true).unwrap();
    scene
}

#[test]
fn test_file_round_trip_preserves_world_geometry() {
    let scene = sample_scene();
    let root = scene.root();
    let group = scene.children(root).unwrap()[0];
    let shape = scene.children(group).unwrap()[0];
    let expected = scene.vertices(shape).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scene.json");
    scene.to_document("sample").unwrap().save_to_file(&path).unwrap();

    let document = SceneDocument::load_from_file(&path).unwrap();
    assert_eq!(document.metadata.name, "sample");

    let loaded = Scene::from_document(&document, SceneConfig::default()).unwrap();
    let loaded_root = loaded.root();
    let loaded_group = loaded.children(loaded_root).unwrap()[0];
    let loaded_shape = loaded.children(loaded_group).unwrap()[0];

    let node = loaded.node(loaded_shape).unwrap();
    assert_eq!(node.kind(), NodeKind::Shape);
    assert_eq!(node.name(), "wedge");
    assert_eq!(node.uid(), scene.node(shape).unwrap().uid());
    assert_eq!(
        loaded.attribute(loaded_shape, "locked").unwrap(),
        Some(&AttributeValue::Bool(true))
    );
    assert!(node.composed_matrix().approx_eq(&node.matrix(), 1e-12));

    let vertices = loaded.vertices(loaded_shape).unwrap();
    for (a, b) in vertices.iter().zip(&expected) {
        assert!(a.approx_eq(*b, 1e-9));
    }
}

#[test]
fn test_load_missing_file_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let err = SceneDocument::load_from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read scene file"));
}

#[test]
fn test_load_malformed_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = SceneDocument::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse scene file"));
}
