//! Ein einzelner Wegpunkt mit Rohkoordinaten, Nachbarn und Labels.

use glam::DVec2;
use indexmap::IndexSet;

/// ID eines Nodes. Negative IDs sind für die Kalibrierungs-Eckpunkte reserviert.
pub type NodeId = i64;

/// Ein Wegpunkt im Graphen.
///
/// Nachbarn und Labels werden ausschließlich über die [`NodeRegistry`]
/// verändert, damit die Symmetrie der Adjazenz erhalten bleibt.
///
/// [`NodeRegistry`]: super::NodeRegistry
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    position: DVec2,
    origin: DVec2,
    pub(super) adjacency: IndexSet<NodeId>,
    pub(super) labels: IndexSet<String>,
}

impl Node {
    /// Erstellt einen Node ohne Nachbarn und Labels.
    pub fn new(id: NodeId, position: DVec2) -> Self {
        Self {
            id,
            position,
            origin: position,
            adjacency: IndexSet::new(),
            labels: IndexSet::new(),
        }
    }

    /// Node-ID
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Aktuelle Position im Rohkoordinaten-System
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Position beim Import bzw. beim Anlegen
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Nachbar-IDs in Einfügereihenfolge
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.iter().copied()
    }

    /// Anzahl der Nachbarn
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Prüft ob `other` ein Nachbar ist.
    pub fn is_adjacent_to(&self, other: NodeId) -> bool {
        self.adjacency.contains(&other)
    }

    /// Labels in Einfügereihenfolge
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Prüft ob der Node das Label trägt.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub(super) fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    /// Kurzbeschreibung für Statusanzeigen.
    pub fn describe(&self) -> String {
        let neighbors: Vec<String> = self.neighbors().map(|n| n.to_string()).collect();
        let labels: Vec<&str> = self.labels().collect();
        format!(
            "Node {} @ ({}, {}), Nachbarn: [{}], Labels: [{}]",
            self.id,
            self.position.x,
            self.position.y,
            neighbors.join(", "),
            labels.join(", ")
        )
    }
}
