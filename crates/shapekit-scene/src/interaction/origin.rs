use std::rc::Rc;

use shapekit_core::{NodeId, Result, Vec2};

use crate::scene::Scene;

/// Strategy returning the world-space point a scale drag pivots about.
#[derive(Clone)]
pub enum TransformOrigin {
    /// The world origin
    WorldOrigin,
    /// The node's own world position (its anchor)
    Anchor,
    /// Center of the node's world-space box
    BoundingBoxCenter,
    /// Center of the box of the top-level cluster the node belongs to
    GroupBoundingBoxCenter,
    /// A fixed world-space point
    Point(Vec2),
    /// Caller-supplied strategy
    Custom(Rc<dyn Fn(&Scene, NodeId) -> Result<Vec2>>),
}

impl TransformOrigin {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Scene, NodeId) -> Result<Vec2> + 'static,
    {
        TransformOrigin::Custom(Rc::new(f))
    }

    /// Resolves the origin for `node`. Box-based strategies fall back to the
    /// node's world position when the node has no geometry.
    pub fn resolve(&self, scene: &Scene, node: NodeId) -> Result<Vec2> {
        let corners = match self {
            TransformOrigin::WorldOrigin => return Ok(Vec2::zero()),
            TransformOrigin::Anchor => return scene.world_position(node),
            TransformOrigin::Point(p) => return Ok(*p),
            TransformOrigin::Custom(f) => return f(scene, node),
            TransformOrigin::BoundingBoxCenter => scene.world_space_bbox_corners(node)?,
            TransformOrigin::GroupBoundingBoxCenter => {
                scene.group_world_space_bounding_box(node)?
            }
        };
        match corners {
            Some([a, _, c, _]) => Ok(a.midpoint(c)),
            None => scene.world_position(node),
        }
    }
}

impl std::fmt::Debug for TransformOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformOrigin::WorldOrigin => write!(f, "WorldOrigin"),
            TransformOrigin::Anchor => write!(f, "Anchor"),
            TransformOrigin::BoundingBoxCenter => write!(f, "BoundingBoxCenter"),
            TransformOrigin::GroupBoundingBoxCenter => write!(f, "GroupBoundingBoxCenter"),
            TransformOrigin::Point(p) => f.debug_tuple("Point").field(p).finish(),
            TransformOrigin::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
