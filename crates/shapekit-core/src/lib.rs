//! # ShapeKit Core
//!
//! Core types, traits, and utilities for ShapeKit.
//! Provides the affine algebra every scene node is built on, the error
//! taxonomy shared by all crates, change notification plumbing and the
//! configuration types the scene consumes.

pub mod config;
pub mod error;
pub mod event;
pub mod math;
pub mod types;

pub use config::{AppearanceSettings, PrecisionSettings, SceneConfig};

pub use error::{Error, InteractionError, MathError, Result, StructureError};

pub use event::{ChangeEvent, ChangeKind, Listener, ListenerId, ListenerRegistry};

pub use math::{precision, Mat3, Vec2};

pub use types::NodeId;
