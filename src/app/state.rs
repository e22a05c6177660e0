//! Application State: zentrale Datenhaltung.

use super::history::EditEventLog;
use super::EditEvent;
use crate::core::{CoordinateScale, NodeRegistry};
use crate::shared::EditorOptions;

/// Hauptzustand der Anwendung
#[derive(Debug, Clone)]
pub struct AppState {
    /// Alle Nodes inklusive der Kalibrierungs-Eckpunkte
    pub registry: NodeRegistry,
    /// Undo/Redo-History (Event-basiert)
    pub history: EditEventLog,
    /// Abbildung Rohkoordinaten ↔ Kartenbild
    pub scale: CoordinateScale,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            registry: NodeRegistry::new(),
            history: EditEventLog::new_with_capacity(options.history_max_depth),
            scale: CoordinateScale::default(),
            options,
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Gibt die Anzahl der Verbindungen zurück (für UI-Anzeige)
    pub fn connection_count(&self) -> usize {
        self.registry.edge_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Zeichnet eine bereits angewendete Mutation in der History auf.
    pub(crate) fn record(&mut self, event: EditEvent) {
        self.history.record(event);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
