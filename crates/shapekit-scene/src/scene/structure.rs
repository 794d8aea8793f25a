//! Structural edits that never move geometry in world space.
//!
//! Every edit validates first and mutates second: a returned error means the
//! tree was not touched.

use shapekit_core::{ChangeKind, NodeId, Result, StructureError, Vec2};

use super::Scene;
use crate::node::NodeKind;

impl Scene {
    /// Detaches `id` from its parent, baking the parent's world matrix into
    /// the node so it keeps its world-space appearance as a detached node.
    pub fn remove_from_parent(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(StructureError::RootNode.into());
        }
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Err(StructureError::NotAttached(id).into());
        };

        let parent_world = self.object_to_world_matrix(parent)?;
        let matrix = parent_world * node.matrix;
        let position = parent_world.apply_to_point(node.position);
        self.set_matrix_and_position(id, matrix, position)?;

        self.unlink(parent, id);
        tracing::debug!("Detached {} from {}", id, parent);
        self.notify(id, ChangeKind::Structure, ["parent"]);
        self.notify(parent, ChangeKind::Structure, ["children"]);
        Ok(())
    }

    /// Attaches a detached node under `new_parent`, expressing its matrix in
    /// the new parent's object space so it keeps its world-space appearance.
    pub fn attach_to_new_parent(&mut self, id: NodeId, new_parent: NodeId) -> Result<()> {
        if let Err(err) = self.validate_attach(id, new_parent) {
            tracing::warn!("Rejected attach of {} to {}: {}", id, new_parent, err);
            return Err(err);
        }
        let to_parent = self.world_to_object_matrix(new_parent)?;

        let node = self.node(id)?;
        let matrix = to_parent * node.matrix;
        let position = to_parent.apply_to_point(node.position);
        self.set_matrix_and_position(id, matrix, position)?;

        self.link(new_parent, id);
        tracing::debug!("Attached {} to {}", id, new_parent);
        self.notify(id, ChangeKind::Structure, ["parent"]);
        self.notify(new_parent, ChangeKind::Structure, ["children"]);
        Ok(())
    }

    /// Moves `id` under `new_parent` without changing any world-space vertex.
    pub fn reparent(&mut self, id: NodeId, new_parent: NodeId) -> Result<()> {
        if let Err(err) = self.validate_reparent(id, new_parent) {
            tracing::warn!("Rejected reparent of {} to {}: {}", id, new_parent, err);
            return Err(err);
        }
        if self.node(id)?.parent.is_some() {
            self.remove_from_parent(id)?;
        }
        self.attach_to_new_parent(id, new_parent)
    }

    fn validate_reparent(&self, id: NodeId, new_parent: NodeId) -> Result<()> {
        if id == self.root {
            return Err(StructureError::RootNode.into());
        }
        self.node(id)?;
        self.node(new_parent)?;
        if self.is_ancestor(id, new_parent) {
            return Err(StructureError::CycleDetected {
                node: id,
                target: new_parent,
            }
            .into());
        }
        // The new parent is outside the moved subtree, so its world matrix
        // does not change when the node is detached.
        self.world_to_object_matrix(new_parent)?;
        Ok(())
    }

    /// Moves all children of `id` into a new group that becomes the sole
    /// child of `id`, then recenters the group's anchor on its contents.
    ///
    /// Returns the new group.
    pub fn group_children(&mut self, id: NodeId) -> Result<NodeId> {
        let previous = self.node(id)?.children.clone();
        // The group sits under `id` with an identity matrix, so a move into
        // it is valid exactly when a move to `id` is.
        self.world_to_object_matrix(id)?;
        for &child in &previous {
            if let Err(err) = self.validate_reparent(child, id) {
                tracing::warn!("Rejected grouping children of {}: {}", id, err);
                return Err(err);
            }
        }

        let group = self.create_group("group");
        self.add_child(id, group)?;
        for child in previous {
            self.reparent(child, group)?;
        }
        self.recenter_anchor_in_subtree(group)?;

        tracing::debug!("Grouped children of {} into {}", id, group);
        Ok(group)
    }

    /// Moves the children of `id` up to its parent. A group is then deleted
    /// and its former parent returned; any other node is kept and returned.
    pub fn ungroup_children(&mut self, id: NodeId) -> Result<NodeId> {
        if id == self.root {
            tracing::warn!("Rejected ungroup of the root node");
            return Err(StructureError::UngroupRoot.into());
        }
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Err(StructureError::NotAttached(id).into());
        };
        let kind = node.kind;
        let children = node.children.clone();
        self.world_to_object_matrix(parent)?;

        for child in children {
            self.reparent(child, parent)?;
        }

        tracing::debug!("Ungrouped children of {} into {}", id, parent);
        if kind == NodeKind::Group {
            self.remove_from_parent(id)?;
            self.delete_node(id)?;
            Ok(parent)
        } else {
            Ok(id)
        }
    }

    /// Moves the node's anchor to the center of its subtree's bounding box
    /// without moving geometry. A node without children snaps its anchor to
    /// its parent's world position instead.
    pub fn recenter_anchor_in_subtree(&mut self, id: NodeId) -> Result<()> {
        let node = self.node(id)?;
        if node.children.is_empty() {
            let target = match node.parent {
                Some(parent) => self.world_position(parent)?,
                None => Vec2::zero(),
            };
            return self.set_world_position(id, target);
        }

        let Some(bbox) = self.child_tree_object_space_bounds(id)? else {
            return Ok(());
        };
        let center = self
            .object_to_world_matrix(id)?
            .apply_to_point(bbox.center());
        self.set_world_position(id, center)
    }
}
