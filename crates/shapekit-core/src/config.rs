//! Scene configuration consumed by the editing core.
//!
//! These sections are embedded in the application settings file and handed to
//! a scene when it is created.

use serde::{Deserialize, Serialize};

use crate::math::precision::{DEFAULT_TINY_MAGNITUDE, DEFAULT_TOLERANCE};

/// Numerical precision settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrecisionSettings {
    /// Minimum magnitude for scale factors and drag denominators
    pub tiny_magnitude: f64,
    /// Absolute tolerance for geometric comparisons
    pub tolerance: f64,
}

impl Default for PrecisionSettings {
    fn default() -> Self {
        Self {
            tiny_magnitude: DEFAULT_TINY_MAGNITUDE,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Default rendering attributes given to newly created nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    /// Fill color
    pub fill: String,
    /// Stroke color
    pub stroke: String,
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Stroke width
    pub line_width: f64,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            fill: "#9ECFFF".to_string(),
            stroke: "#000000".to_string(),
            opacity: 1.0,
            line_width: 2.0,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Precision settings
    pub precision: PrecisionSettings,
    /// Appearance defaults
    pub appearance: AppearanceSettings,
}
