//! Use-Case-Funktionen für Node/Connection/Label-Editing.
//!
//! Jede Funktion validiert zuerst, mutiert dann die Registry und zeichnet
//! genau ein [`EditEvent`](crate::app::EditEvent) auf. Fehlgeschlagene oder
//! wirkungslose Aufrufe hinterlassen keinen History-Eintrag.
//!
//! Aufgeteilt nach Operation:
//! - `add_node`: Neuen Node anlegen
//! - `delete_node`: Node inklusive Verbindungen löschen
//! - `connect`: Verbindungen erstellen
//! - `disconnect`: Verbindungen entfernen
//! - `move_node`: Node verschieben oder zurücksetzen
//! - `labels`: Labels hinzufügen und entfernen

mod add_node;
mod connect;
mod delete_node;
mod disconnect;
mod labels;
mod move_node;

pub use add_node::{create_node, create_node_at_render};
pub use connect::connect;
pub use delete_node::delete_node;
pub use disconnect::disconnect;
pub use labels::{add_label, remove_label};
pub use move_node::{move_node, move_node_to_render, reset_node_position};

use crate::core::{GraphError, GraphResult};
use glam::DVec2;

/// Nur endliche Positionen lassen sich exportieren und wieder einlesen.
fn ensure_finite(position: DVec2) -> GraphResult<()> {
    if position.is_finite() {
        return Ok(());
    }
    log::warn!(
        "Ungültige Position ({}, {}) abgelehnt",
        position.x,
        position.y
    );
    Err(GraphError::InvalidPosition {
        x: position.x,
        y: position.y,
    })
}
