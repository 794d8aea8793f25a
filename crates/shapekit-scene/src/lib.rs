//! # ShapeKit Scene
//!
//! The scene graph: an arena of nodes, each carrying a decomposed affine
//! transform that is kept consistent with its composed matrix, plus the
//! structural edits, bounding-box queries and pointer interactions built on
//! top of it.
//!
//! ## Modules
//!
//! - [`node`] - the scene node and its transform properties
//! - [`scene`] - the node arena, transform composition and structural edits
//! - [`bounds`] - axis-aligned bounding boxes
//! - [`attributes`] - rendering attribute dictionaries
//! - [`interaction`] - drag state machines and the pointer event router
//! - [`document`] - the serialization surface

pub mod attributes;
pub mod bounds;
pub mod document;
pub mod interaction;
pub mod node;
pub mod scene;

pub use attributes::{AttributeValue, Attributes};
pub use bounds::BoundingBox;
pub use document::{DocumentMetadata, NodeData, SceneDocument};
pub use interaction::{
    DragBehavior, DragState, HandleId, Interaction, InteractionController, PointerEvent,
    TransformOrigin,
};
pub use node::{NodeKind, SceneNode, TransformSnapshot};
pub use scene::Scene;

pub use shapekit_core::{
    ChangeEvent, ChangeKind, Error, ListenerId, Mat3, NodeId, Result, SceneConfig, Vec2,
};
