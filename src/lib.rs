//! # ShapeKit
//!
//! Editing core for hierarchical 2D vector drawings:
//! - Affine scene graph whose nodes keep a matrix and its decomposed
//!   properties in step
//! - Structural edits (reparent, group, ungroup, recenter) that leave the
//!   drawing visually unchanged
//! - Bounding-box aggregation across subtrees
//! - Drag interactions (move, anchor, scale around a point)
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Vector/matrix algebra, errors, change notifications
//! 2. **shapekit-scene** - Scene graph, structural edits, bounds, interactions, documents
//! 3. **shapekit-settings** - Configuration files and validation
//! 4. **shapekit** - Re-exports, logging setup and the `shapekit` binary

pub mod report;

pub use shapekit_core::{
    ChangeEvent, ChangeKind, Error, InteractionError, ListenerId, Mat3, MathError, NodeId,
    Result, SceneConfig, StructureError, Vec2,
};

pub use shapekit_scene::{
    AttributeValue, Attributes, BoundingBox, DragBehavior, DragState, HandleId, Interaction,
    InteractionController, NodeKind, PointerEvent, Scene, SceneDocument, SceneNode,
    TransformOrigin,
};

pub use shapekit_settings::{
    Config, InteractionSettings, LoggingSettings, ScaleMode, SettingsError, SettingsResult,
};

pub use report::{render_items, RenderItem};

/// Initialize structured logging
///
/// `RUST_LOG` takes precedence over the configured level. Output goes to
/// stderr so command output on stdout stays machine-readable.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    if settings.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    tracing::debug!("Logging initialized at '{}'", settings.level);
    Ok(())
}

/// Builds a scale interaction using the configured scale variant.
pub fn scale_interaction(
    settings: &InteractionSettings,
    handle: HandleId,
    node: NodeId,
    origin: TransformOrigin,
) -> Interaction {
    match settings.canonical_scale {
        ScaleMode::Snapshot => Interaction::scale_around(handle, node, origin),
        ScaleMode::Incremental => Interaction::new(
            "incremental-scale",
            handle,
            node,
            DragBehavior::IncrementalScale(origin),
        ),
    }
}
