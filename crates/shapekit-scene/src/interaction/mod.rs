//! # Interactions
//!
//! Pointer-driven transform edits. Each [`Interaction`] binds one handle to
//! one node and runs an idle → dragging → idle state machine. A node may have
//! several bindings, one per handle, each with its own state.
//!
//! Drag behaviors:
//!
//! - [`DragBehavior::Move`]: the node follows the cursor, geometry included.
//! - [`DragBehavior::Anchor`]: the node's anchor follows the cursor while the
//!   geometry stays put.
//! - [`DragBehavior::ScaleAroundPoint`]: rebuilds the matrix from the
//!   drag-start snapshot on every move, so the result depends only on the
//!   snapshot and the current cursor.
//! - [`DragBehavior::IncrementalScale`]: multiplies the node's scale by the
//!   ratio between consecutive cursor positions and re-snapshots after every
//!   move. Rounding accumulates over long drags; prefer
//!   `ScaleAroundPoint` unless a handle depends on the incremental feel.
//!
//! Cursor and origin are expressed in the node's parent space, so nested
//! nodes scale along their own axes.

mod controller;
mod origin;

pub use controller::InteractionController;
pub use origin::TransformOrigin;

use shapekit_core::precision::clamp_tiny;
use shapekit_core::{Error, InteractionError, Mat3, NodeId, Result, Vec2};

use crate::node::TransformSnapshot;
use crate::scene::Scene;

/// Identifies a UI handle an interaction is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub u64);

impl std::fmt::Display for HandleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Handle({})", self.0)
    }
}

/// Pointer event delivered by the event source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Cursor position in world space
    pub position: Vec2,
    /// Handle under the pointer, if any
    pub target: Option<HandleId>,
}

impl PointerEvent {
    pub fn new(position: Vec2, target: Option<HandleId>) -> Self {
        Self { position, target }
    }

    /// Event over `handle`.
    pub fn on(handle: HandleId, position: Vec2) -> Self {
        Self::new(position, Some(handle))
    }

    /// Event not over any handle.
    pub fn at(position: Vec2) -> Self {
        Self::new(position, None)
    }

    pub fn targets(&self, handle: HandleId) -> bool {
        self.target == Some(handle)
    }
}

/// What a drag does to its node.
#[derive(Debug, Clone)]
pub enum DragBehavior {
    Move,
    Anchor,
    ScaleAroundPoint(TransformOrigin),
    IncrementalScale(TransformOrigin),
}

impl DragBehavior {
    pub fn label(&self) -> &'static str {
        match self {
            DragBehavior::Move => "move",
            DragBehavior::Anchor => "anchor",
            DragBehavior::ScaleAroundPoint(_) => "scale",
            DragBehavior::IncrementalScale(_) => "incremental-scale",
        }
    }
}

/// Interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Change of basis captured at drag start for the canonical scale.
#[derive(Debug, Clone, Copy)]
struct ScaleBasis {
    to_parent: Mat3,
    tr: Mat3,
    ri_ti: Mat3,
    start_matrix: Mat3,
    start_cursor: Vec2,
}

/// Basis re-captured after every move of the incremental scale.
#[derive(Debug, Clone, Copy)]
struct IncrementalBasis {
    to_local: Mat3,
    cursor: Vec2,
}

#[derive(Debug, Clone, Copy)]
enum Tracking {
    Stateless,
    Scale(ScaleBasis),
    Incremental(IncrementalBasis),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSnapshot {
    start: TransformSnapshot,
    tracking: Tracking,
}

/// A handle bound to a node with a drag behavior.
#[derive(Debug, Clone)]
pub struct Interaction {
    name: String,
    handle: HandleId,
    node: NodeId,
    behavior: DragBehavior,
    drag: Option<DragSnapshot>,
}

impl Interaction {
    pub fn new(name: impl Into<String>, handle: HandleId, node: NodeId, behavior: DragBehavior) -> Self {
        Self {
            name: name.into(),
            handle,
            node,
            behavior,
            drag: None,
        }
    }

    pub fn moving(handle: HandleId, node: NodeId) -> Self {
        Self::new("move", handle, node, DragBehavior::Move)
    }

    pub fn anchor(handle: HandleId, node: NodeId) -> Self {
        Self::new("anchor", handle, node, DragBehavior::Anchor)
    }

    pub fn scale_around(handle: HandleId, node: NodeId, origin: TransformOrigin) -> Self {
        Self::new("scale", handle, node, DragBehavior::ScaleAroundPoint(origin))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> HandleId {
        self.handle
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn behavior(&self) -> &DragBehavior {
        &self.behavior
    }

    pub fn state(&self) -> DragState {
        if self.drag.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag when `event` targets this interaction's handle.
    ///
    /// Returns `Ok(false)` for events aimed elsewhere. Errors (such as a
    /// node whose transform cannot be inverted) leave the interaction idle
    /// and the scene untouched.
    pub fn drag_start(&mut self, scene: &mut Scene, event: &PointerEvent) -> Result<bool> {
        match self.prepare_start(scene, event)? {
            Some(snapshot) => {
                self.begin(snapshot, event.position);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Captures the drag-start state without entering the dragging state.
    /// `None` when the event is aimed at another handle.
    pub(crate) fn prepare_start(
        &self,
        scene: &Scene,
        event: &PointerEvent,
    ) -> Result<Option<DragSnapshot>> {
        if !event.targets(self.handle) {
            return Ok(None);
        }
        if self.drag.is_some() {
            return Err(InteractionError::AlreadyDragging {
                name: self.name.clone(),
            }
            .into());
        }

        match self.capture(scene, event.position) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                tracing::warn!("Aborted drag start of '{}' on {}: {}", self.name, self.node, err);
                Err(err)
            }
        }
    }

    pub(crate) fn begin(&mut self, snapshot: DragSnapshot, cursor: Vec2) {
        self.drag = Some(snapshot);
        tracing::debug!(
            "Drag '{}' ({}) started on {} at {}",
            self.name,
            self.behavior.label(),
            self.node,
            cursor
        );
    }

    /// Applies a cursor move to the node.
    pub fn drag_move(&mut self, scene: &mut Scene, event: &PointerEvent) -> Result<()> {
        let Some(snapshot) = self.drag else {
            return Err(self.not_dragging());
        };
        tracing::trace!("Drag '{}' move to {}", self.name, event.position);
        let cursor = event.position;

        match (&self.behavior, snapshot.tracking) {
            (DragBehavior::Move, _) => scene.move_to_world_position(self.node, cursor),
            (DragBehavior::Anchor, _) => scene.set_world_position(self.node, cursor),
            (DragBehavior::ScaleAroundPoint(_), Tracking::Scale(basis)) => {
                let tiny = scene.tiny();
                let local = basis.ri_ti.apply_to_point(basis.to_parent.apply_to_point(cursor));
                let rescale = Vec2::new(
                    clamp_tiny(local.x, tiny, "drag cursor x")
                        / clamp_tiny(basis.start_cursor.x, tiny, "drag start x"),
                    clamp_tiny(local.y, tiny, "drag cursor y")
                        / clamp_tiny(basis.start_cursor.y, tiny, "drag start y"),
                );
                let matrix = basis.tr * Mat3::scale(rescale) * basis.ri_ti * basis.start_matrix;
                scene.set_matrix_preserving_rotation(self.node, matrix)
            }
            (DragBehavior::IncrementalScale(origin), Tracking::Incremental(basis)) => {
                let tiny = scene.tiny();
                let local = basis.to_local.apply_to_point(cursor);
                let ratio = Vec2::new(
                    clamp_tiny(local.x, tiny, "drag cursor x")
                        / clamp_tiny(basis.cursor.x, tiny, "drag previous x"),
                    clamp_tiny(local.y, tiny, "drag cursor y")
                        / clamp_tiny(basis.cursor.y, tiny, "drag previous y"),
                );
                let scale = scene.node(self.node)?.scale();
                scene.set_scale(self.node, Vec2::new(scale.x * ratio.x, scale.y * ratio.y))?;

                let next = incremental_basis(scene, self.node, origin, cursor)?;
                self.drag = Some(DragSnapshot {
                    tracking: Tracking::Incremental(next),
                    ..snapshot
                });
                Ok(())
            }
            (DragBehavior::ScaleAroundPoint(_), tracking)
            | (DragBehavior::IncrementalScale(_), tracking) => Err(Error::other(format!(
                "drag '{}' ({}) holds mismatched tracking {:?}",
                self.name,
                self.behavior.label(),
                tracking
            ))),
        }
    }

    /// Ends the drag. The last move stands.
    pub fn drag_end(&mut self) -> Result<()> {
        if self.drag.take().is_none() {
            return Err(self.not_dragging());
        }
        tracing::debug!("Drag '{}' ended on {}", self.name, self.node);
        Ok(())
    }

    /// Ends the drag and puts the node's transform back as it was at drag
    /// start.
    pub fn cancel(&mut self, scene: &mut Scene) -> Result<()> {
        let Some(snapshot) = self.drag.take() else {
            return Err(self.not_dragging());
        };
        scene.restore_transform(self.node, &snapshot.start)?;
        tracing::debug!("Drag '{}' cancelled on {}", self.name, self.node);
        Ok(())
    }

    fn capture(&self, scene: &Scene, cursor: Vec2) -> Result<DragSnapshot> {
        let node = scene.node(self.node)?;
        let start = node.transform_snapshot();
        start.matrix.try_inverse()?;

        let tracking = match &self.behavior {
            DragBehavior::Move | DragBehavior::Anchor => {
                scene.parent_world_matrix(self.node)?.try_inverse()?;
                Tracking::Stateless
            }
            DragBehavior::ScaleAroundPoint(origin) => {
                let to_parent = scene.parent_world_matrix(self.node)?.try_inverse()?;
                let origin = to_parent.apply_to_point(origin.resolve(scene, self.node)?);
                let tr = Mat3::translation(origin) * Mat3::rotation(start.rotation);
                let ri_ti = tr.try_inverse()?;
                Tracking::Scale(ScaleBasis {
                    to_parent,
                    tr,
                    ri_ti,
                    start_matrix: start.matrix,
                    start_cursor: ri_ti.apply_to_point(to_parent.apply_to_point(cursor)),
                })
            }
            DragBehavior::IncrementalScale(origin) => {
                Tracking::Incremental(incremental_basis(scene, self.node, origin, cursor)?)
            }
        };
        Ok(DragSnapshot { start, tracking })
    }

    fn not_dragging(&self) -> Error {
        InteractionError::NotDragging {
            name: self.name.clone(),
        }
        .into()
    }
}

/// `R(-rotation) * T(-origin)` in parent space, composed with world-to-parent.
fn incremental_basis(
    scene: &Scene,
    node: NodeId,
    origin: &TransformOrigin,
    cursor: Vec2,
) -> Result<IncrementalBasis> {
    let to_parent = scene.parent_world_matrix(node)?.try_inverse()?;
    let origin = to_parent.apply_to_point(origin.resolve(scene, node)?);
    let rotation = scene.node(node)?.rotation();
    let to_local = Mat3::rotation(-rotation) * Mat3::translation(-origin) * to_parent;
    Ok(IncrementalBasis {
        to_local,
        cursor: to_local.apply_to_point(cursor),
    })
}
