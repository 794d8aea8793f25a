//! Rendering attribute dictionaries.
//!
//! Attributes are opaque to the geometry code: the scene stores them,
//! reports changes to them and hands them to whoever draws the node.

use serde::{Deserialize, Serialize};
use shapekit_core::AppearanceSettings;
use std::collections::BTreeMap;

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl AttributeValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ordered attribute dictionary
pub type Attributes = BTreeMap<String, AttributeValue>;

/// Initial attribute dictionary for a new node.
pub fn default_attributes(appearance: &AppearanceSettings) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("fill".into(), appearance.fill.clone().into());
    attributes.insert("stroke".into(), appearance.stroke.clone().into());
    attributes.insert("opacity".into(), appearance.opacity.into());
    attributes.insert("line_width".into(), appearance.line_width.into());
    attributes
}
