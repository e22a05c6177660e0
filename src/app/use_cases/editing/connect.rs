//! Use-Case: Verbindung zwischen zwei Nodes erstellen.

use crate::app::{AppState, EditEvent};
use crate::core::{GraphResult, NodeId};

/// Verbindet zwei Nodes symmetrisch.
///
/// Gibt `Ok(false)` zurück, wenn die Verbindung bereits bestand
/// (kein History-Eintrag).
pub fn connect(state: &mut AppState, a: NodeId, b: NodeId) -> GraphResult<bool> {
    let added = state.registry.connect(a, b).inspect_err(|e| {
        log::warn!("Verbindung {}↔{} nicht möglich: {}", a, b, e);
    })?;

    if !added {
        log::debug!("Verbindung {}↔{} existiert bereits", a, b);
        return Ok(false);
    }

    state.record(EditEvent::ConnectionAdded { a, b });
    log::info!("Verbindung {}↔{} erstellt", a, b);
    Ok(true)
}
