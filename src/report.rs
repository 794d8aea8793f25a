//! World-space render data for every node of a scene.

use serde::Serialize;

use crate::{Attributes, BoundingBox, NodeId, NodeKind, Result, Scene, Vec2};

/// One node as a renderer sees it: world-space geometry plus attributes.
///
/// `bounds` is the box a selection outline is drawn around; for groups it
/// covers the whole subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub world_position: Vec2,
    pub vertices: Vec<Vec2>,
    pub bounds: Option<BoundingBox>,
    pub attributes: Attributes,
}

/// Collects render items for the whole tree, parents before children.
pub fn render_items(scene: &Scene) -> Result<Vec<RenderItem>> {
    let mut items = Vec::new();
    collect(scene, scene.root(), 0, &mut items)?;
    Ok(items)
}

fn collect(scene: &Scene, id: NodeId, depth: usize, items: &mut Vec<RenderItem>) -> Result<()> {
    let node = scene.node(id)?;
    items.push(RenderItem {
        id,
        name: node.name().to_string(),
        kind: node.kind(),
        depth,
        world_position: scene.world_position(id)?,
        vertices: scene.vertices(id)?,
        bounds: scene
            .world_space_bbox_corners(id)?
            .and_then(BoundingBox::from_points),
        attributes: node.attributes().clone(),
    });
    for &child in node.children() {
        collect(scene, child, depth + 1, items)?;
    }
    Ok(())
}
