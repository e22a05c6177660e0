//! Use-Case: Undo/Redo über die Event-History.

use crate::app::AppState;
use crate::core::GraphResult;

/// Macht die letzte Mutation rückgängig.
///
/// Gibt `Ok(false)` zurück, wenn die History leer ist.
pub fn undo(state: &mut AppState) -> GraphResult<bool> {
    match state.history.undo(&mut state.registry) {
        Ok(true) => {
            log::info!("Undo ausgeführt ({} verbleibend)", state.history.cursor());
            Ok(true)
        }
        Ok(false) => {
            log::debug!("Undo: nichts rückgängig zu machen");
            Ok(false)
        }
        Err(e) => {
            log::warn!("Undo fehlgeschlagen: {}", e);
            Err(e)
        }
    }
}

/// Wendet die zuletzt rückgängig gemachte Mutation erneut an.
pub fn redo(state: &mut AppState) -> GraphResult<bool> {
    match state.history.redo(&mut state.registry) {
        Ok(true) => {
            log::info!("Redo ausgeführt");
            Ok(true)
        }
        Ok(false) => {
            log::debug!("Redo: nichts zu wiederholen");
            Ok(false)
        }
        Err(e) => {
            log::warn!("Redo fehlgeschlagen: {}", e);
            Err(e)
        }
    }
}
