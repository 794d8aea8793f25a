use shapekit_core::{NodeId, Result};

use super::{Interaction, PointerEvent};
use crate::node::TransformSnapshot;
use crate::scene::Scene;

/// Routes pointer events to interaction bindings.
///
/// Pointer-down goes to every binding whose handle is the event target.
/// Move and up go only to bindings that are currently dragging, whatever
/// the pointer is over.
#[derive(Debug, Default)]
pub struct InteractionController {
    interactions: Vec<Interaction>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, interaction: Interaction) {
        tracing::debug!(
            "Bound '{}' to {} on {}",
            interaction.name(),
            interaction.handle(),
            interaction.node()
        );
        self.interactions.push(interaction);
    }

    /// Drops every binding targeting `node`, returning how many were removed.
    pub fn unbind_node(&mut self, node: NodeId) -> usize {
        let before = self.interactions.len();
        self.interactions.retain(|i| i.node() != node);
        before - self.interactions.len()
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn is_dragging(&self) -> bool {
        self.interactions.iter().any(Interaction::is_dragging)
    }

    /// Starts every binding the event targets and returns how many started.
    ///
    /// All targeted bindings are captured before any of them starts; if one
    /// capture fails, none start and the error is returned.
    pub fn pointer_down(&mut self, scene: &mut Scene, event: &PointerEvent) -> Result<usize> {
        let mut pending = Vec::new();
        for (index, interaction) in self.interactions.iter().enumerate() {
            if let Some(snapshot) = interaction.prepare_start(scene, event)? {
                pending.push((index, snapshot));
            }
        }
        for &(index, snapshot) in &pending {
            self.interactions[index].begin(snapshot, event.position);
        }
        Ok(pending.len())
    }

    /// Applies the move to every dragging binding. When one of them fails,
    /// transforms already changed by this move and the bindings' drag state
    /// are put back before the error is returned.
    pub fn pointer_move(&mut self, scene: &mut Scene, event: &PointerEvent) -> Result<()> {
        let saved: Vec<_> = self.interactions.iter().map(|i| i.drag).collect();
        let mut touched: Vec<(NodeId, TransformSnapshot)> = Vec::new();

        let result = self.apply_move(scene, event, &mut touched);
        if let Err(err) = result {
            for (node, snapshot) in touched.iter().rev() {
                scene.restore_transform(*node, snapshot)?;
            }
            for (interaction, drag) in self.interactions.iter_mut().zip(saved) {
                interaction.drag = drag;
            }
            tracing::warn!("Rolled back pointer move to {}: {}", event.position, err);
            return Err(err);
        }
        Ok(())
    }

    fn apply_move(
        &mut self,
        scene: &mut Scene,
        event: &PointerEvent,
        touched: &mut Vec<(NodeId, TransformSnapshot)>,
    ) -> Result<()> {
        for interaction in self.interactions.iter_mut().filter(|i| i.is_dragging()) {
            let node = interaction.node();
            touched.push((node, scene.node(node)?.transform_snapshot()));
            interaction.drag_move(scene, event)?;
        }
        Ok(())
    }

    /// Ends every running drag. The event position is not applied; the last
    /// move stands.
    pub fn pointer_up(&mut self, _event: &PointerEvent) -> Result<()> {
        for interaction in self.interactions.iter_mut().filter(|i| i.is_dragging()) {
            interaction.drag_end()?;
        }
        Ok(())
    }

    /// Cancels every running drag, restoring the start transforms.
    pub fn cancel(&mut self, scene: &mut Scene) -> Result<()> {
        for interaction in self.interactions.iter_mut().filter(|i| i.is_dragging()) {
            interaction.cancel(scene)?;
        }
        Ok(())
    }
}
