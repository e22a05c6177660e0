//! Use-Case: Node verschieben (Roh- oder Render-Koordinaten) und zurücksetzen.

use crate::app::{AppState, EditEvent};
use crate::core::{is_reserved, GraphError, GraphResult, NodeId};
use glam::DVec2;

/// Verschiebt einen Node an eine neue Rohposition.
///
/// Gibt `Ok(false)` zurück, wenn der Node bereits dort steht.
pub fn move_node(state: &mut AppState, id: NodeId, position: DVec2) -> GraphResult<bool> {
    if is_reserved(id) {
        log::warn!("Eckpunkt {} kann nicht verschoben werden", id);
        return Err(GraphError::Protected(id));
    }
    super::ensure_finite(position)?;

    let from = state.registry.get(id)?.position();
    if from == position {
        log::debug!("Node {} steht bereits an ({}, {})", id, position.x, position.y);
        return Ok(false);
    }

    state.registry.set_position(id, position)?;
    state.record(EditEvent::NodeMoved {
        id,
        from,
        to: position,
    });

    log::info!(
        "Node {} verschoben: ({:.2}, {:.2}) → ({:.2}, {:.2})",
        id,
        from.x,
        from.y,
        position.x,
        position.y
    );
    Ok(true)
}

/// Verschiebt einen Node an eine Render-Position (Drag im Kartenbild).
pub fn move_node_to_render(state: &mut AppState, id: NodeId, rendered: DVec2) -> GraphResult<bool> {
    let position = state.scale.to_raw(rendered);
    move_node(state, id, position)
}

/// Setzt einen Node auf seine Import- bzw. Anlege-Position zurück.
pub fn reset_node_position(state: &mut AppState, id: NodeId) -> GraphResult<bool> {
    let origin = state.registry.get(id)?.origin();
    move_node(state, id, origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Node, UPPER_LEFT_CORNER};

    #[test]
    fn test_move_and_reset() {
        let mut state = AppState::new();
        let id = state.registry.create(DVec2::new(1.0, 1.0)).unwrap();

        assert_eq!(move_node(&mut state, id, DVec2::new(4.0, 5.0)), Ok(true));
        assert_eq!(move_node(&mut state, id, DVec2::new(4.0, 5.0)), Ok(false));
        assert_eq!(reset_node_position(&mut state, id), Ok(true));
        assert_eq!(state.registry.get(id).unwrap().position(), DVec2::new(1.0, 1.0));
        assert_eq!(state.history.len(), 2);

        state.history.undo(&mut state.registry).unwrap();
        assert_eq!(state.registry.get(id).unwrap().position(), DVec2::new(4.0, 5.0));
    }

    #[test]
    fn test_move_corner_is_protected() {
        let mut state = AppState::new();
        state
            .registry
            .insert(Node::new(UPPER_LEFT_CORNER, DVec2::ZERO))
            .unwrap();
        assert_eq!(
            move_node(&mut state, UPPER_LEFT_CORNER, DVec2::ONE),
            Err(GraphError::Protected(UPPER_LEFT_CORNER))
        );
        assert_eq!(
            state.registry.get(UPPER_LEFT_CORNER).unwrap().position(),
            DVec2::ZERO
        );
    }

    #[test]
    fn test_move_to_nan_is_rejected() {
        let mut state = AppState::new();
        let id = state.registry.create(DVec2::new(3.0, 4.0)).unwrap();

        let result = move_node(&mut state, id, DVec2::new(f64::NAN, 5.0));
        assert!(matches!(result, Err(GraphError::InvalidPosition { .. })));
        assert_eq!(state.registry.get(id).unwrap().position(), DVec2::new(3.0, 4.0));
        assert!(state.history.is_empty());
    }
}
