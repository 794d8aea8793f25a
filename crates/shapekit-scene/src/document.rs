//! Serialization surface for scenes.
//!
//! A [`SceneDocument`] holds each node's decomposed properties, object-space
//! vertices, attributes and children. Matrices and cached corners are not
//! stored; they are rebuilt from the properties after loading.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use shapekit_core::precision::clamp_tiny;
use shapekit_core::{NodeId, SceneConfig, Vec2};

use crate::attributes::Attributes;
use crate::node::NodeKind;
use crate::scene::Scene;

/// Document format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete scene document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    pub version: String,
    pub metadata: DocumentMetadata,
    pub root: NodeData,
}

/// Document metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Serialized node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default = "Uuid::new_v4")]
    pub uid: Uuid,
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: Vec2,
    #[serde(default)]
    pub anchor_shift: Vec2,
    #[serde(default)]
    pub vertices: Option<Vec<Vec2>>,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<NodeData>,
}

fn default_scale() -> Vec2 {
    Vec2::new(1.0, 1.0)
}

impl SceneDocument {
    /// Create a new empty document
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: DocumentMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            root: NodeData {
                uid: Uuid::new_v4(),
                kind: NodeKind::Group,
                name: "root".to_string(),
                position: Vec2::zero(),
                rotation: 0.0,
                scale: default_scale(),
                anchor_shift: Vec2::zero(),
                vertices: None,
                attributes: Attributes::new(),
                children: Vec::new(),
            },
        }
    }

    /// Save document to file
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize scene")?;

        std::fs::write(path.as_ref(), json).context("Failed to write scene file")?;

        Ok(())
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read scene file")?;

        let document: SceneDocument =
            serde_json::from_str(&content).context("Failed to parse scene file")?;

        if document.version != FILE_FORMAT_VERSION {
            tracing::warn!(
                "Scene file version {} differs from {}",
                document.version,
                FILE_FORMAT_VERSION
            );
        }

        Ok(document)
    }
}

impl Scene {
    /// Captures the tree under the root as a document.
    pub fn to_document(&self, name: impl Into<String>) -> Result<SceneDocument> {
        let mut document = SceneDocument::new(name);
        document.root = self.node_data(self.root())?;
        Ok(document)
    }

    fn node_data(&self, id: NodeId) -> Result<NodeData> {
        let node = self.node(id)?;
        let children = node
            .children()
            .iter()
            .map(|&child| self.node_data(child))
            .collect::<Result<Vec<_>>>()?;
        Ok(NodeData {
            uid: node.uid(),
            kind: node.kind(),
            name: node.name().to_string(),
            position: node.position(),
            rotation: node.rotation(),
            scale: node.scale(),
            anchor_shift: node.anchor_shift(),
            vertices: node.object_vertices().map(<[Vec2]>::to_vec),
            attributes: node.attributes().clone(),
            children,
        })
    }

    /// Rebuilds a scene from a document.
    pub fn from_document(document: &SceneDocument, config: SceneConfig) -> Result<Scene> {
        let mut scene = Scene::with_config(config);
        let root = scene.root();
        if document.root.kind != NodeKind::Group {
            tracing::warn!(
                "Scene root '{}' is stored as a {}; loading it as a group",
                document.root.name,
                document.root.kind
            );
        }
        scene.restore_node(root, &document.root)?;
        for child in &document.root.children {
            scene.load_subtree(root, child)?;
        }
        tracing::debug!(
            "Loaded scene '{}' with {} nodes",
            document.metadata.name,
            scene.len()
        );
        Ok(scene)
    }

    fn load_subtree(&mut self, parent: NodeId, data: &NodeData) -> Result<()> {
        let id = match data.kind {
            NodeKind::Group => self.create_group(&data.name),
            NodeKind::Shape => self.create_shape(&data.name, Vec::new()),
        };
        self.add_child(parent, id)
            .with_context(|| format!("Failed to attach '{}'", data.name))?;
        self.restore_node(id, data)?;
        for child in &data.children {
            self.load_subtree(id, child)?;
        }
        Ok(())
    }

    /// Writes stored properties, vertices and attributes into `id`, then
    /// rebuilds the matrix and corners from them.
    fn restore_node(&mut self, id: NodeId, data: &NodeData) -> Result<()> {
        let tiny = self.tiny();
        let is_group = {
            let node = self.node_mut(id)?;
            node.uid = data.uid;
            node.name = data.name.clone();
            node.position = data.position;
            node.rotation = data.rotation;
            node.scale = Vec2::new(
                clamp_tiny(data.scale.x, tiny, "loaded scale.x"),
                clamp_tiny(data.scale.y, tiny, "loaded scale.y"),
            );
            node.anchor_shift = data.anchor_shift;
            node.attributes = data.attributes.clone();
            node.is_group()
        };
        match &data.vertices {
            Some(vertices) if is_group => tracing::warn!(
                "Discarded {} vertices stored on group '{}'",
                vertices.len(),
                data.name
            ),
            Some(vertices) => self.set_object_vertices(id, vertices.clone())?,
            None => {}
        }
        self.after_load(id)?;
        Ok(())
    }

    /// Recomputes the matrix from the decomposed properties and the cached
    /// corners from the vertices.
    pub fn after_load(&mut self, id: NodeId) -> shapekit_core::Result<()> {
        let node = self.node_mut(id)?;
        node.update_matrix();
        if let Some(vertices) = node.object_vertices.take() {
            node.store_object_vertices(vertices);
        }
        Ok(())
    }
}
