use crate::core::NodeId;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral über den
/// [`AppController`](crate::app::AppController) ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Node an Rohposition anlegen
    CreateNode { position: DVec2 },
    /// Neuen Node an Render-Position (z.B. Mausklick auf das Kartenbild) anlegen
    CreateNodeAtRender { rendered: DVec2 },
    /// Node inklusive aller Verbindungen löschen
    DeleteNode { id: NodeId },
    /// Zwei Nodes verbinden
    Connect { a: NodeId, b: NodeId },
    /// Verbindung zwischen zwei Nodes entfernen
    Disconnect { a: NodeId, b: NodeId },
    /// Node an Rohposition verschieben
    MoveNode { id: NodeId, position: DVec2 },
    /// Node an Render-Position verschieben
    MoveNodeToRender { id: NodeId, rendered: DVec2 },
    /// Node auf seine Import-Position zurücksetzen
    ResetNodePosition { id: NodeId },
    /// Label hinzufügen
    AddLabel { id: NodeId, label: String },
    /// Label entfernen
    RemoveLabel { id: NodeId, label: String },
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Letzte rückgängig gemachte Aktion wiederholen
    Redo,
}
