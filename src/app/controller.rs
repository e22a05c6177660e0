//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases;
use super::{AppCommand, AppState};
use crate::core::GraphError;

/// Führt [`AppCommand`]s über die Use-Cases auf dem AppState aus.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen mutierenden Command aus.
    ///
    /// Schlägt der Command fehl, bleiben Registry und History unverändert.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> Result<(), GraphError> {
        use super::use_cases::editing;

        match command {
            // === Nodes ===
            AppCommand::CreateNode { position } => {
                editing::create_node(state, position)?;
            }
            AppCommand::CreateNodeAtRender { rendered } => {
                editing::create_node_at_render(state, rendered)?;
            }
            AppCommand::DeleteNode { id } => editing::delete_node(state, id)?,

            // === Verbindungen ===
            AppCommand::Connect { a, b } => {
                editing::connect(state, a, b)?;
            }
            AppCommand::Disconnect { a, b } => {
                editing::disconnect(state, a, b)?;
            }

            // === Positionen ===
            AppCommand::MoveNode { id, position } => {
                editing::move_node(state, id, position)?;
            }
            AppCommand::MoveNodeToRender { id, rendered } => {
                editing::move_node_to_render(state, id, rendered)?;
            }
            AppCommand::ResetNodePosition { id } => {
                editing::reset_node_position(state, id)?;
            }

            // === Labels ===
            AppCommand::AddLabel { id, label } => editing::add_label(state, id, &label)?,
            AppCommand::RemoveLabel { id, label } => editing::remove_label(state, id, &label)?,

            // === History ===
            AppCommand::Undo => {
                use_cases::history::undo(state)?;
            }
            AppCommand::Redo => {
                use_cases::history::redo(state)?;
            }
        }

        debug_assert!(state.registry.is_consistent());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn test_commands_are_dispatched_and_undoable() {
        let mut controller = AppController::new();
        let mut state = AppState::new();

        for position in [DVec2::ZERO, DVec2::new(5.0, 5.0)] {
            controller
                .handle_command(&mut state, AppCommand::CreateNode { position })
                .expect("CreateNode erwartet");
        }
        controller
            .handle_command(&mut state, AppCommand::Connect { a: 0, b: 1 })
            .expect("Connect erwartet");
        assert!(state.registry.are_connected(0, 1));
        assert_eq!(state.history.len(), 3);

        controller
            .handle_command(&mut state, AppCommand::Undo)
            .expect("Undo erwartet");
        assert!(!state.registry.are_connected(0, 1));
        assert!(state.can_redo());
    }

    #[test]
    fn test_failed_command_changes_nothing() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        let err = controller
            .handle_command(&mut state, AppCommand::Connect { a: 3, b: 4 })
            .unwrap_err();
        assert_eq!(err, GraphError::NotFound(3));
        assert!(state.history.is_empty());
    }
}
