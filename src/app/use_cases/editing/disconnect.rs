//! Use-Case: Verbindung zwischen zwei Nodes entfernen.

use crate::app::{AppState, EditEvent};
use crate::core::{GraphResult, NodeId};

/// Trennt zwei Nodes symmetrisch.
///
/// Gibt `Ok(false)` zurück, wenn keine Verbindung bestand.
pub fn disconnect(state: &mut AppState, a: NodeId, b: NodeId) -> GraphResult<bool> {
    let removed = state.registry.disconnect(a, b).inspect_err(|e| {
        log::warn!("Verbindung {}↔{} nicht trennbar: {}", a, b, e);
    })?;

    if !removed {
        log::debug!("Keine Verbindung {}↔{} vorhanden", a, b);
        return Ok(false);
    }

    state.record(EditEvent::ConnectionRemoved { a, b });
    log::info!("Verbindung {}↔{} entfernt", a, b);
    Ok(true)
}
