//! # Scene
//!
//! Arena of [`SceneNode`]s addressed by [`NodeId`]. Parents own their
//! children through the `children` id list; children refer back to their
//! parent by id only, so the tree holds no ownership cycles.
//!
//! The scene is created with a root group living directly in world space.
//! Nodes may also exist detached (created but not attached, or removed from
//! their parent); a detached node is treated as living in world space.
//!
//! Every mutation that completes successfully notifies the listeners of the
//! affected node before returning.

mod attributes;
mod bounds;
mod structure;
mod transform;

use std::collections::HashMap;

use shapekit_core::{
    ChangeEvent, ChangeKind, ListenerId, ListenerRegistry, NodeId, Result, SceneConfig,
    StructureError, Vec2,
};

use crate::attributes::default_attributes;
use crate::node::{NodeKind, SceneNode};

/// Scene tree with change notification.
#[derive(Debug)]
pub struct Scene {
    nodes: HashMap<NodeId, SceneNode>,
    root: NodeId,
    next_id: u64,
    listeners: ListenerRegistry,
    config: SceneConfig,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        let mut scene = Self {
            nodes: HashMap::new(),
            root: NodeId(0),
            next_id: 0,
            listeners: ListenerRegistry::new(),
            config,
        };
        scene.root = scene.create_node(NodeKind::Group, "root");
        scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub(crate) fn tiny(&self) -> f64 {
        self.config.precision.tiny_magnitude
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Generates a new node id.
    fn generate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn create_node(&mut self, kind: NodeKind, name: &str) -> NodeId {
        let id = self.generate_id();
        let attributes = default_attributes(&self.config.appearance);
        self.nodes
            .insert(id, SceneNode::new(id, kind, name.to_string(), attributes));
        id
    }

    /// Creates a detached shape with the given object-space vertices.
    pub fn create_shape(&mut self, name: &str, vertices: Vec<Vec2>) -> NodeId {
        let id = self.create_node(NodeKind::Shape, name);
        if vertices.is_empty() {
            return id;
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.store_object_vertices(vertices);
        }
        id
    }

    /// Creates a detached, empty group.
    pub fn create_group(&mut self, name: &str) -> NodeId {
        self.create_node(NodeKind::Group, name)
    }

    /// Appends `child` to `parent` without touching the child's matrix.
    ///
    /// Unlike [`Scene::attach_to_new_parent`] this does not preserve the
    /// child's world-space appearance; it is how freshly built content is
    /// placed into the tree.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.validate_attach(child, parent)?;
        self.link(parent, child);
        self.notify(child, ChangeKind::Structure, ["parent"]);
        self.notify(parent, ChangeKind::Structure, ["children"]);
        Ok(())
    }

    /// Creates a shape and appends it to `parent`.
    pub fn add_shape(&mut self, parent: NodeId, name: &str, vertices: Vec<Vec2>) -> Result<NodeId> {
        self.node(parent)?;
        let id = self.create_shape(name, vertices);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Creates a group and appends it to `parent`.
    pub fn add_group(&mut self, parent: NodeId, name: &str) -> Result<NodeId> {
        self.node(parent)?;
        let id = self.create_group(name);
        self.add_child(parent, id)?;
        Ok(id)
    }

    /// Removes `id` and its whole subtree from the scene.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        if id == self.root {
            return Err(StructureError::RootNode.into());
        }
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            self.unlink(parent, id);
        }

        let mut pending = vec![id];
        let mut removed = 0usize;
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                pending.extend(node.children);
                self.listeners.clear_node(current);
                removed += 1;
            }
        }
        tracing::debug!("Deleted {} ({} nodes)", id, removed);

        if let Some(parent) = parent {
            self.notify(parent, ChangeKind::Structure, ["children"]);
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&SceneNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| StructureError::UnknownNode(id).into())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| StructureError::UnknownNode(id).into())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Whether `ancestor` lies on the parent chain of `node` (or is `node`).
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    /// Ids of `id` and all of its descendants, parents before children.
    pub fn subtree(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            out.push(current);
            if let Some(node) = self.nodes.get(&current) {
                pending.extend(node.children.iter().rev());
            }
        }
        Ok(out)
    }

    /// Registers a listener for changes of `node`.
    pub fn subscribe<F>(&mut self, node: NodeId, listener: F) -> Result<ListenerId>
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.node(node)?;
        Ok(self.listeners.subscribe(node, listener))
    }

    pub fn unsubscribe(&mut self, node: NodeId, id: ListenerId) -> bool {
        self.listeners.unsubscribe(node, id)
    }

    pub(crate) fn notify<I, S>(&self, node: NodeId, kind: ChangeKind, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.listeners
            .notify(&ChangeEvent::new(node, kind, keys));
    }

    /// Checks that `child` can be attached under `parent`.
    pub(crate) fn validate_attach(&self, child: NodeId, parent: NodeId) -> Result<()> {
        if child == self.root {
            return Err(StructureError::RootNode.into());
        }
        if self.node(child)?.parent.is_some() {
            return Err(StructureError::AlreadyAttached(child).into());
        }
        self.node(parent)?;
        if self.is_ancestor(child, parent) {
            return Err(StructureError::CycleDetected {
                node: child,
                target: parent,
            }
            .into());
        }
        Ok(())
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = None;
        }
    }
}
