//! Scene node: decomposed transform, optional geometry and attributes.
//!
//! A node's `matrix` maps its object space into its parent's object space.
//! It is kept equal to
//! `Translation(position) * Rotation(rotation) * Scale(scale) * Translation(anchor_shift)`:
//! setting a property recomposes the matrix and setting the matrix
//! decomposes it back into properties.
//!
//! Mutation goes through [`Scene`](crate::Scene) so that listeners are
//! notified; this module only holds the per-node arithmetic.

use serde::{Deserialize, Serialize};
use shapekit_core::precision::clamp_tiny;
use shapekit_core::{Mat3, NodeId, Result, Vec2};
use uuid::Uuid;

use crate::attributes::Attributes;
use crate::bounds::BoundingBox;

/// Property keys reported in change events.
pub const KEY_MATRIX: &str = "matrix";
pub const KEY_POSITION: &str = "position";
pub const KEY_ROTATION: &str = "rotation";
pub const KEY_SCALE: &str = "scale";
pub const KEY_ANCHOR_SHIFT: &str = "anchor_shift";

/// Every transform key, for events that touch the whole decomposition.
pub const TRANSFORM_KEYS: [&str; 5] = [
    KEY_MATRIX,
    KEY_POSITION,
    KEY_ROTATION,
    KEY_SCALE,
    KEY_ANCHOR_SHIFT,
];

/// Node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Node that may own geometry
    Shape,
    /// Structural node; never owns geometry
    Group,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Shape => write!(f, "shape"),
            NodeKind::Group => write!(f, "group"),
        }
    }
}

/// Copy of a node's transform, used to roll back an edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSnapshot {
    pub matrix: Mat3,
    pub position: Vec2,
    pub rotation: f64,
    pub scale: Vec2,
    pub anchor_shift: Vec2,
}

/// A node of the scene tree.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub(crate) id: NodeId,
    pub(crate) uid: Uuid,
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    pub(crate) matrix: Mat3,
    pub(crate) position: Vec2,
    pub(crate) rotation: f64,
    pub(crate) scale: Vec2,
    pub(crate) anchor_shift: Vec2,
    pub(crate) object_vertices: Option<Vec<Vec2>>,
    pub(crate) object_space_corners: Option<[Vec2; 4]>,
    pub(crate) attributes: Attributes,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl SceneNode {
    pub(crate) fn new(id: NodeId, kind: NodeKind, name: String, attributes: Attributes) -> Self {
        Self {
            id,
            uid: Uuid::new_v4(),
            name,
            kind,
            matrix: Mat3::identity(),
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor_shift: Vec2::zero(),
            object_vertices: None,
            object_space_corners: None,
            attributes,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Stable identifier that survives save and load.
    pub fn uid(&self) -> Uuid {
        self.uid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }

    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.rotation.to_degrees()
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn anchor_shift(&self) -> Vec2 {
        self.anchor_shift
    }

    /// Matrix that maps the anchor point, rather than the object origin, to
    /// `position`.
    pub fn anchor_matrix(&self) -> Mat3 {
        self.matrix * Mat3::translation(-self.anchor_shift)
    }

    pub fn object_vertices(&self) -> Option<&[Vec2]> {
        self.object_vertices.as_deref()
    }

    pub fn object_space_corners(&self) -> Option<[Vec2; 4]> {
        self.object_space_corners
    }

    pub fn object_space_bounds(&self) -> Option<BoundingBox> {
        self.object_space_corners
            .map(|[min, _, max, _]| BoundingBox { min, max })
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn transform_snapshot(&self) -> TransformSnapshot {
        TransformSnapshot {
            matrix: self.matrix,
            position: self.position,
            rotation: self.rotation,
            scale: self.scale,
            anchor_shift: self.anchor_shift,
        }
    }

    pub(crate) fn restore_transform(&mut self, snapshot: &TransformSnapshot) {
        self.matrix = snapshot.matrix;
        self.position = snapshot.position;
        self.rotation = snapshot.rotation;
        self.scale = snapshot.scale;
        self.anchor_shift = snapshot.anchor_shift;
    }

    /// Matrix composed from the four decomposed properties.
    pub fn composed_matrix(&self) -> Mat3 {
        Mat3::from_properties(self.position, self.rotation, self.scale, self.anchor_shift)
    }

    /// Recomputes `matrix` from the decomposed properties.
    pub(crate) fn update_matrix(&mut self) {
        self.matrix = self.composed_matrix();
    }

    /// Recomputes rotation (optionally), scale and anchor shift from `matrix`,
    /// keeping `position` as the reference point.
    ///
    /// Rotation is the angle of the image of the x axis. Scale is read off
    /// the rotation-free matrix and clamped away from zero. The anchor shift
    /// takes whatever offset remains. A matrix with shear cannot be
    /// represented exactly; the matrix itself is left untouched either way.
    pub(crate) fn update_matrix_properties(
        &mut self,
        update_rotation: bool,
        tiny_magnitude: f64,
    ) -> Result<()> {
        if update_rotation {
            let ex = self.matrix.apply_to_vector(Vec2::new(1.0, 0.0));
            self.rotation = ex.y.atan2(ex.x);
        }

        let no_rotation = Mat3::rotation(-self.rotation) * self.matrix;
        self.scale = Vec2::new(
            clamp_tiny(no_rotation.m(0, 0), tiny_magnitude, "scale.x"),
            clamp_tiny(no_rotation.m(1, 1), tiny_magnitude, "scale.y"),
        );

        let base = Mat3::translation(self.position)
            * Mat3::rotation(self.rotation)
            * Mat3::scale(self.scale);
        self.anchor_shift = (base.try_inverse()? * self.matrix).apply_to_point(Vec2::zero());
        Ok(())
    }

    /// Stores object-space vertices and refreshes the cached corners.
    pub(crate) fn store_object_vertices(&mut self, vertices: Vec<Vec2>) {
        self.object_space_corners = BoundingBox::from_points(vertices.iter().copied())
            .map(|bbox| bbox.corners());
        self.object_vertices = Some(vertices);
    }

    pub(crate) fn clear_object_vertices(&mut self) {
        self.object_vertices = None;
        self.object_space_corners = None;
    }
}
