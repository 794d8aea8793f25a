//! # Change notification
//!
//! Per-node listener registry. After a mutation completes, the scene builds a
//! [`ChangeEvent`] and every listener registered on the affected node is
//! invoked synchronously, in registration order. Nothing is batched or
//! debounced.
//!
//! Listeners only receive the event; they have no access to the scene and so
//! cannot mutate the node they observe from inside the callback.
//!
//! ```rust,ignore
//! let id = registry.subscribe(node, |event| {
//!     println!("{} changed: {:?}", event.node, event.kind);
//! });
//! registry.unsubscribe(node, id);
//! ```

use std::collections::HashMap;
use uuid::Uuid;

use crate::types::NodeId;

/// Subscription handle for unsubscribing a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(Uuid);

impl ListenerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", &self.0.to_string()[..8])
    }
}

/// What part of a node changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Matrix and/or decomposed transform properties
    Properties,
    /// Object-space geometry
    Vertices,
    /// Rendering attributes
    Attributes,
    /// Parent or children
    Structure,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Properties => write!(f, "properties"),
            ChangeKind::Vertices => write!(f, "vertices"),
            ChangeKind::Attributes => write!(f, "attributes"),
            ChangeKind::Structure => write!(f, "structure"),
        }
    }
}

/// Change descriptor delivered to listeners
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The node that changed
    pub node: NodeId,
    /// Kind of change
    pub kind: ChangeKind,
    /// Affected keys (property names or attribute keys)
    pub keys: Vec<String>,
}

impl ChangeEvent {
    pub fn new<I, S>(node: NodeId, kind: ChangeKind, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            node,
            kind,
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `key` is among the affected keys
    pub fn touches(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}

/// Listener callback type
pub type Listener = Box<dyn Fn(&ChangeEvent)>;

/// Ordered listeners per node
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: HashMap<NodeId, Vec<(ListenerId, Listener)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener on `node`. Listeners run in registration order.
    pub fn subscribe<F>(&mut self, node: NodeId, listener: F) -> ListenerId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        let id = ListenerId::new();
        self.listeners
            .entry(node)
            .or_default()
            .push((id, Box::new(listener)));
        tracing::debug!("{} added on {}", id, node);
        id
    }

    /// Unregister a listener.
    ///
    /// Returns true if the listener was found and removed.
    pub fn unsubscribe(&mut self, node: NodeId, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&node) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        let removed = list.len() != before;
        if list.is_empty() {
            self.listeners.remove(&node);
        }
        if removed {
            tracing::debug!("{} removed from {}", id, node);
        }
        removed
    }

    /// Drop every listener registered on `node`
    pub fn clear_node(&mut self, node: NodeId) {
        self.listeners.remove(&node);
    }

    /// Invoke every listener on `event.node` synchronously
    pub fn notify(&self, event: &ChangeEvent) {
        if let Some(list) = self.listeners.get(&event.node) {
            for (_, listener) in list {
                listener(event);
            }
        }
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.get(&node).map_or(0, Vec::len)
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("nodes", &self.listeners.len())
            .field(
                "listeners",
                &self.listeners.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}
