//! Use-Case: Labels an Nodes hinzufügen und entfernen.

use crate::app::{AppState, EditEvent};
use crate::core::{GraphResult, NodeId};

/// Fügt einem Node ein Label hinzu.
pub fn add_label(state: &mut AppState, id: NodeId, label: &str) -> GraphResult<()> {
    let label = label.trim();
    state.registry.add_label(id, label).inspect_err(|e| {
        log::warn!("Label nicht hinzufügbar: {}", e);
    })?;
    state.record(EditEvent::LabelAdded {
        id,
        label: label.to_string(),
    });
    log::info!("Label '{}' an Node {} hinzugefügt", label, id);
    Ok(())
}

/// Entfernt ein Label von einem Node.
pub fn remove_label(state: &mut AppState, id: NodeId, label: &str) -> GraphResult<()> {
    let index = state.registry.remove_label(id, label).inspect_err(|e| {
        log::warn!("Label nicht entfernbar: {}", e);
    })?;
    state.record(EditEvent::LabelRemoved {
        id,
        label: label.to_string(),
        index,
    });
    log::info!("Label '{}' von Node {} entfernt", label, id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GraphError;
    use glam::DVec2;

    #[test]
    fn test_add_trims_and_rejects_duplicates() {
        let mut state = AppState::new();
        let id = state.registry.create(DVec2::ZERO).unwrap();
        add_label(&mut state, id, "  Mensa ").unwrap();
        assert!(state.registry.get(id).unwrap().has_label("Mensa"));
        assert_eq!(
            add_label(&mut state, id, "Mensa"),
            Err(GraphError::DuplicateLabel {
                id,
                label: "Mensa".to_string()
            })
        );
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_remove_label_undo_restores_order() {
        let mut state = AppState::new();
        let id = state.registry.create(DVec2::ZERO).unwrap();
        for label in ["Nord", "Mitte", "Süd"] {
            add_label(&mut state, id, label).unwrap();
        }
        remove_label(&mut state, id, "Mitte").unwrap();
        state.history.undo(&mut state.registry).unwrap();

        let labels: Vec<&str> = state.registry.get(id).unwrap().labels().collect();
        assert_eq!(labels, vec!["Nord", "Mitte", "Süd"]);
    }
}
