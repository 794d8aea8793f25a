//! Bounding-box aggregation over subtrees.

use shapekit_core::{NodeId, Result, Vec2};

use super::Scene;
use crate::bounds::BoundingBox;

impl Scene {
    /// Union of the node's own object-space box and every descendant's box,
    /// expressed in the node's object space.
    ///
    /// `None` when the subtree has no geometry anywhere.
    pub fn child_tree_object_space_bounds(&self, id: NodeId) -> Result<Option<BoundingBox>> {
        let node = self.node(id)?;
        let mut bounds = node.object_space_bounds();

        for &child_id in &node.children {
            let child_matrix = self.node(child_id)?.matrix;
            if let Some(child_bounds) = self.child_tree_object_space_bounds(child_id)? {
                let local = child_bounds.transformed(&child_matrix);
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&local),
                    None => local,
                });
            }
        }
        Ok(bounds)
    }

    /// Corners of [`Scene::child_tree_object_space_bounds`] in canonical
    /// order `[min,min]`, `[max,min]`, `[max,max]`, `[min,max]`.
    pub fn child_tree_object_space_bounding_box(&self, id: NodeId) -> Result<Option<[Vec2; 4]>> {
        Ok(self
            .child_tree_object_space_bounds(id)?
            .map(|bbox| bbox.corners()))
    }

    /// The object-space subtree corners pushed through the world matrix.
    pub fn child_tree_world_space_bounding_box(&self, id: NodeId) -> Result<Option<[Vec2; 4]>> {
        let Some(corners) = self.child_tree_object_space_bounding_box(id)? else {
            return Ok(None);
        };
        let world = self.object_to_world_matrix(id)?;
        Ok(Some(corners.map(|p| world.apply_to_point(p))))
    }

    /// World-space subtree box of the top-level cluster containing `id`: the
    /// nearest ancestor (or `id` itself) whose parent has no parent.
    pub fn group_world_space_bounding_box(&self, id: NodeId) -> Result<Option<[Vec2; 4]>> {
        let mut current = id;
        while let Some(parent) = self.node(current)?.parent {
            if self.node(parent)?.parent.is_none() {
                break;
            }
            current = parent;
        }
        self.child_tree_world_space_bounding_box(current)
    }

    /// World-space box corners used for rendering handles: a shape's own box
    /// through its world matrix, or a group's whole subtree box.
    pub fn world_space_bbox_corners(&self, id: NodeId) -> Result<Option<[Vec2; 4]>> {
        let node = self.node(id)?;
        if node.is_group() {
            return self.child_tree_world_space_bounding_box(id);
        }
        let Some(corners) = node.object_space_corners() else {
            return Ok(None);
        };
        let world = self.object_to_world_matrix(id)?;
        Ok(Some(corners.map(|p| world.apply_to_point(p))))
    }

    /// Exact axis-aligned bounds of the node's world-space vertices.
    pub fn world_bounds(&self, id: NodeId) -> Result<Option<BoundingBox>> {
        Ok(BoundingBox::from_points(self.vertices(id)?))
    }
}
