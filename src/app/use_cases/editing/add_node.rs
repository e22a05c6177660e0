//! Use-Case: Neuen Node hinzufügen.

use crate::app::{AppState, EditEvent};
use crate::core::{GraphResult, NodeId};
use glam::DVec2;

/// Legt einen neuen Node an der gegebenen Rohposition an.
pub fn create_node(state: &mut AppState, position: DVec2) -> GraphResult<NodeId> {
    super::ensure_finite(position)?;
    let id = state.registry.create(position)?;
    let node = state.registry.get(id)?.clone();
    state.record(EditEvent::NodeCreated { node });

    log::info!(
        "Node {} an Position ({:.2}, {:.2}) hinzugefügt",
        id,
        position.x,
        position.y
    );
    Ok(id)
}

/// Legt einen neuen Node an einer Render-Position an (z.B. Klick ins Kartenbild).
pub fn create_node_at_render(state: &mut AppState, rendered: DVec2) -> GraphResult<NodeId> {
    let position = state.scale.to_raw(rendered);
    create_node(state, position)
}
