//! Use-Case: Node inklusive aller Verbindungen löschen.

use crate::app::{AppState, EditEvent};
use crate::core::{is_reserved, GraphError, GraphResult, NodeId};

/// Löscht einen Node und entfernt ihn aus allen Nachbarlisten.
///
/// Kalibrierungs-Eckpunkte sind geschützt.
pub fn delete_node(state: &mut AppState, id: NodeId) -> GraphResult<()> {
    if is_reserved(id) {
        log::warn!("Eckpunkt {} kann nicht gelöscht werden", id);
        return Err(GraphError::Protected(id));
    }

    let (node, index) = state.registry.remove(id).inspect_err(|e| {
        log::warn!("Node {} nicht löschbar: {}", id, e);
    })?;
    let description = node.describe();
    state.record(EditEvent::NodeDeleted { node, index });

    log::info!("Gelöscht: {}", description);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Node, LOWER_RIGHT_CORNER, UPPER_LEFT_CORNER};
    use glam::DVec2;

    #[test]
    fn test_delete_corner_is_protected() {
        let mut state = AppState::new();
        state
            .registry
            .insert(Node::new(UPPER_LEFT_CORNER, DVec2::ZERO))
            .unwrap();
        state
            .registry
            .insert(Node::new(LOWER_RIGHT_CORNER, DVec2::ONE))
            .unwrap();

        for corner in [UPPER_LEFT_CORNER, LOWER_RIGHT_CORNER] {
            assert_eq!(
                delete_node(&mut state, corner),
                Err(GraphError::Protected(corner))
            );
        }
        assert_eq!(state.registry.len(), 2);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_delete_node_detaches_and_undo_restores() {
        let mut state = AppState::new();
        for i in 0..3 {
            state.registry.create(DVec2::splat(i as f64)).unwrap();
        }
        state.registry.connect(0, 1).unwrap();
        state.registry.connect(1, 2).unwrap();
        let before = state.registry.clone();

        delete_node(&mut state, 1).unwrap();
        assert!(state.registry.all().all(|n| !n.is_adjacent_to(1)));

        state.history.undo(&mut state.registry).unwrap();
        assert_eq!(state.registry, before);
        assert_eq!(state.registry.ids().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_delete_missing_node_records_nothing() {
        let mut state = AppState::new();
        assert_eq!(delete_node(&mut state, 4), Err(GraphError::NotFound(4)));
        assert!(state.history.is_empty());
    }
}
