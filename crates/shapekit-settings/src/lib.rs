//! ShapeKit Settings Crate
//!
//! Handles application configuration: the scene section handed to new
//! scenes, logging, interaction preferences and the recent files list.

pub mod config;
pub mod error;

pub use config::{Config, InteractionSettings, LoggingSettings, ScaleMode};
pub use error::{SettingsError, SettingsResult};
