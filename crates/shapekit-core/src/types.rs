//! Identifier types shared across crates.

use serde::{Deserialize, Serialize};

/// Identifies a node inside one scene's node arena.
///
/// Ids are handed out sequentially by the owning scene and are never reused
/// within that scene, so a stale id of a deleted node simply fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Returns the raw numeric id
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
