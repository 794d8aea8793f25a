use shapekit_core::{ChangeKind, NodeId, Result};

use super::Scene;
use crate::attributes::{AttributeValue, Attributes};

impl Scene {
    pub fn attributes(&self, id: NodeId) -> Result<&Attributes> {
        Ok(self.node(id)?.attributes())
    }

    pub fn attribute(&self, id: NodeId, key: &str) -> Result<Option<&AttributeValue>> {
        Ok(self.node(id)?.attributes.get(key))
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        key: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<()> {
        self.node_mut(id)?
            .attributes
            .insert(key.to_string(), value.into());
        self.notify(id, ChangeKind::Attributes, [key]);
        Ok(())
    }

    /// Merges `values` into the node's attributes; one notification lists
    /// every key written.
    pub fn set_attributes(&mut self, id: NodeId, values: Attributes) -> Result<()> {
        let node = self.node_mut(id)?;
        let keys: Vec<String> = values.keys().cloned().collect();
        node.attributes.extend(values);
        if !keys.is_empty() {
            self.notify(id, ChangeKind::Attributes, keys);
        }
        Ok(())
    }
}
