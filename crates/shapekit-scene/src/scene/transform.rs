//! Transform composition, world-space conversions and geometry setters.

use shapekit_core::precision::{clamp_tiny, signed_tiny};
use shapekit_core::{ChangeKind, Mat3, NodeId, Result, Vec2};

use super::Scene;
use crate::bounds::BoundingBox;
use crate::node::{
    TransformSnapshot, KEY_ANCHOR_SHIFT, KEY_MATRIX, KEY_POSITION, KEY_ROTATION, KEY_SCALE,
    TRANSFORM_KEYS,
};

impl Scene {
    /// Object-to-world matrix: this node's matrix composed with every
    /// ancestor's, up to the root or the top of a detached subtree.
    pub fn object_to_world_matrix(&self, id: NodeId) -> Result<Mat3> {
        let node = self.node(id)?;
        let mut matrix = node.matrix;
        let mut current = node.parent;
        while let Some(parent_id) = current {
            let parent = self.node(parent_id)?;
            matrix = parent.matrix * matrix;
            current = parent.parent;
        }
        Ok(matrix)
    }

    pub fn world_to_object_matrix(&self, id: NodeId) -> Result<Mat3> {
        Ok(self.object_to_world_matrix(id)?.try_inverse()?)
    }

    /// World matrix of the parent, identity for the root and detached nodes.
    pub fn parent_world_matrix(&self, id: NodeId) -> Result<Mat3> {
        match self.node(id)?.parent {
            Some(parent) => self.object_to_world_matrix(parent),
            None => Ok(Mat3::identity()),
        }
    }

    /// The node's `position` expressed in world space.
    pub fn world_position(&self, id: NodeId) -> Result<Vec2> {
        let position = self.node(id)?.position;
        Ok(self.parent_world_matrix(id)?.apply_to_point(position))
    }

    /// Moves the node's anchor to `world_point` without moving any vertex.
    ///
    /// `position` becomes the requested point in parent space and
    /// `anchor_shift` absorbs the difference, so the matrix is unchanged.
    pub fn set_world_position(&mut self, id: NodeId, world_point: Vec2) -> Result<()> {
        let to_parent = self.parent_world_matrix(id)?.try_inverse()?;
        let position = to_parent.apply_to_point(world_point);
        let tiny = self.tiny();

        let node = self.node_mut(id)?;
        let previous = node.position;
        node.position = position;
        if let Err(err) = node.update_matrix_properties(false, tiny) {
            node.position = previous;
            return Err(err);
        }

        self.notify(id, ChangeKind::Properties, [KEY_POSITION, KEY_ANCHOR_SHIFT]);
        Ok(())
    }

    /// Moves the node so that its anchor lands on `world_point`, carrying the
    /// geometry along.
    pub fn move_to_world_position(&mut self, id: NodeId, world_point: Vec2) -> Result<()> {
        let to_parent = self.parent_world_matrix(id)?.try_inverse()?;
        self.set_position(id, to_parent.apply_to_point(world_point))
    }

    /// Sets the parent-space position and recomposes the matrix.
    pub fn set_position(&mut self, id: NodeId, position: Vec2) -> Result<()> {
        let node = self.node_mut(id)?;
        node.position = position;
        node.update_matrix();
        self.notify(id, ChangeKind::Properties, [KEY_MATRIX, KEY_POSITION]);
        Ok(())
    }

    /// Sets the rotation in radians and recomposes the matrix.
    pub fn set_rotation(&mut self, id: NodeId, radians: f64) -> Result<()> {
        let node = self.node_mut(id)?;
        node.rotation = radians;
        node.update_matrix();
        self.notify(id, ChangeKind::Properties, [KEY_MATRIX, KEY_ROTATION]);
        Ok(())
    }

    pub fn set_rotation_degrees(&mut self, id: NodeId, degrees: f64) -> Result<()> {
        self.set_rotation(id, degrees.to_radians())
    }

    /// Sets the scale and recomposes the matrix. Components are clamped away
    /// from zero.
    pub fn set_scale(&mut self, id: NodeId, scale: Vec2) -> Result<()> {
        let tiny = self.tiny();
        let node = self.node_mut(id)?;
        node.scale = Vec2::new(
            clamp_tiny(scale.x, tiny, "scale.x"),
            clamp_tiny(scale.y, tiny, "scale.y"),
        );
        node.update_matrix();
        self.notify(id, ChangeKind::Properties, [KEY_MATRIX, KEY_SCALE]);
        Ok(())
    }

    pub fn set_uniform_scale(&mut self, id: NodeId, factor: f64) -> Result<()> {
        self.set_scale(id, Vec2::new(factor, factor))
    }

    pub fn set_anchor_shift(&mut self, id: NodeId, anchor_shift: Vec2) -> Result<()> {
        let node = self.node_mut(id)?;
        node.anchor_shift = anchor_shift;
        node.update_matrix();
        self.notify(id, ChangeKind::Properties, [KEY_MATRIX, KEY_ANCHOR_SHIFT]);
        Ok(())
    }

    /// Replaces the matrix and re-derives all decomposed properties,
    /// including rotation.
    pub fn set_matrix(&mut self, id: NodeId, matrix: Mat3) -> Result<()> {
        self.apply_matrix(id, matrix, None, true)
    }

    /// Replaces the matrix but keeps the current rotation, so a flip shows up
    /// as a negative scale rather than a half turn.
    pub fn set_matrix_preserving_rotation(&mut self, id: NodeId, matrix: Mat3) -> Result<()> {
        self.apply_matrix(id, matrix, None, false)
    }

    /// Sets `position` first, then the matrix, then decomposes.
    pub fn set_matrix_and_position(
        &mut self,
        id: NodeId,
        matrix: Mat3,
        position: Vec2,
    ) -> Result<()> {
        self.apply_matrix(id, matrix, Some(position), true)
    }

    /// Re-derives the decomposed properties from the current matrix.
    pub fn update_matrix_properties(&mut self, id: NodeId, update_rotation: bool) -> Result<()> {
        let matrix = self.node(id)?.matrix;
        self.apply_matrix(id, matrix, None, update_rotation)
    }

    fn apply_matrix(
        &mut self,
        id: NodeId,
        matrix: Mat3,
        position: Option<Vec2>,
        update_rotation: bool,
    ) -> Result<()> {
        let tiny = self.tiny();
        let node = self.node_mut(id)?;
        let snapshot = node.clone();
        if let Some(position) = position {
            node.position = position;
        }
        node.matrix = matrix;
        if let Err(err) = node.update_matrix_properties(update_rotation, tiny) {
            *node = snapshot;
            return Err(err);
        }
        self.notify(id, ChangeKind::Properties, TRANSFORM_KEYS);
        Ok(())
    }

    /// Puts back a transform captured with [`SceneNode::transform_snapshot`].
    ///
    /// [`SceneNode::transform_snapshot`]: crate::node::SceneNode::transform_snapshot
    pub fn restore_transform(&mut self, id: NodeId, snapshot: &TransformSnapshot) -> Result<()> {
        self.node_mut(id)?.restore_transform(snapshot);
        self.notify(id, ChangeKind::Properties, TRANSFORM_KEYS);
        Ok(())
    }

    /// World-space vertices of the node's own geometry.
    pub fn vertices(&self, id: NodeId) -> Result<Vec<Vec2>> {
        let world = self.object_to_world_matrix(id)?;
        let node = self.node(id)?;
        Ok(node
            .object_vertices()
            .map(|verts| world.apply_to_points(verts.iter().copied()).collect())
            .unwrap_or_default())
    }

    /// Stores geometry given in world space. Groups ignore this.
    pub fn set_vertices(&mut self, id: NodeId, world_vertices: &[Vec2]) -> Result<()> {
        if self.node(id)?.is_group() {
            return Ok(());
        }
        let to_object = self.world_to_object_matrix(id)?;
        let object = to_object
            .apply_to_points(world_vertices.iter().copied())
            .collect();
        self.set_object_vertices(id, object)
    }

    /// Stores geometry given in object space. An empty list removes the
    /// geometry. Groups ignore this.
    pub fn set_object_vertices(&mut self, id: NodeId, vertices: Vec<Vec2>) -> Result<()> {
        let node = self.node_mut(id)?;
        if node.is_group() {
            return Ok(());
        }
        if vertices.is_empty() {
            node.clear_object_vertices();
        } else {
            node.store_object_vertices(vertices);
        }
        self.notify(id, ChangeKind::Vertices, ["object_vertices", "object_space_corners"]);
        Ok(())
    }

    /// Rescales the object-space geometry into a unit box centered on the
    /// object origin and compensates the matrix so world-space vertices stay
    /// put.
    ///
    /// Axes whose extent is below one are left unscaled. With
    /// `center_origin` the position moves to the new object origin and the
    /// anchor shift becomes zero.
    pub fn renormalize_vertices(&mut self, id: NodeId, center_origin: bool) -> Result<()> {
        let node = self.node(id)?;
        let Some(bbox) = node
            .object_vertices()
            .and_then(|verts| BoundingBox::from_points(verts.iter().copied()))
        else {
            return Ok(());
        };

        let center = bbox.center();
        let extent = Vec2::new(signed_tiny(bbox.width(), 1.0), signed_tiny(bbox.height(), 1.0));
        let normalize = Mat3::scale(Vec2::new(1.0 / extent.x, 1.0 / extent.y))
            * Mat3::translation(-center);
        let denormalize = Mat3::translation(center) * Mat3::scale(extent);

        let vertices: Vec<Vec2> = node
            .object_vertices()
            .map(|verts| normalize.apply_to_points(verts.iter().copied()).collect())
            .unwrap_or_default();
        let matrix = node.matrix * denormalize;
        let position = if center_origin {
            matrix.apply_to_point(Vec2::zero())
        } else {
            node.position
        };

        self.set_object_vertices(id, vertices)?;
        self.set_matrix_and_position(id, matrix, position)
    }
}
