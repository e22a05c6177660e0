use crate::core::{GraphResult, Node, NodeId, NodeRegistry};
use glam::DVec2;

/// Umkehrbarer Datensatz einer einzelnen Graph-Mutation.
///
/// Jede Variante trägt genau die Daten, die für Undo und Redo nötig sind,
/// ohne externen Zustand abzufragen.
#[derive(Debug, Clone, PartialEq)]
pub enum EditEvent {
    /// Node wurde neu angelegt
    NodeCreated { node: Node },
    /// Verbindung wurde hinzugefügt
    ConnectionAdded { a: NodeId, b: NodeId },
    /// Verbindung wurde entfernt
    ConnectionRemoved { a: NodeId, b: NodeId },
    /// Node wurde verschoben
    NodeMoved { id: NodeId, from: DVec2, to: DVec2 },
    /// Node wurde gelöscht (vollständiger Snapshot inkl. Index in der Registry)
    NodeDeleted { node: Node, index: usize },
    /// Label wurde hinzugefügt
    LabelAdded { id: NodeId, label: String },
    /// Label wurde entfernt (inkl. früherer Position in der Label-Liste)
    LabelRemoved {
        id: NodeId,
        label: String,
        index: usize,
    },
}

impl EditEvent {
    /// Macht die Mutation rückgängig.
    pub fn undo(&self, registry: &mut NodeRegistry) -> GraphResult<()> {
        match self {
            Self::NodeCreated { node } => {
                registry.remove(node.id())?;
            }
            Self::ConnectionAdded { a, b } => {
                registry.disconnect(*a, *b)?;
            }
            Self::ConnectionRemoved { a, b } => {
                registry.connect(*a, *b)?;
            }
            Self::NodeMoved { id, from, .. } => {
                registry.set_position(*id, *from)?;
            }
            Self::NodeDeleted { node, index } => {
                registry.restore(node.clone(), *index)?;
            }
            Self::LabelAdded { id, label } => {
                registry.remove_label(*id, label)?;
            }
            Self::LabelRemoved { id, label, index } => {
                registry.restore_label(*id, label, *index)?;
            }
        }
        Ok(())
    }

    /// Wendet die Mutation erneut an.
    pub fn redo(&self, registry: &mut NodeRegistry) -> GraphResult<()> {
        match self {
            Self::NodeCreated { node } => {
                registry.insert(node.clone())?;
            }
            Self::ConnectionAdded { a, b } => {
                registry.connect(*a, *b)?;
            }
            Self::ConnectionRemoved { a, b } => {
                registry.disconnect(*a, *b)?;
            }
            Self::NodeMoved { id, to, .. } => {
                registry.set_position(*id, *to)?;
            }
            Self::NodeDeleted { node, .. } => {
                registry.remove(node.id())?;
            }
            Self::LabelAdded { id, label } => {
                registry.add_label(*id, label)?;
            }
            Self::LabelRemoved { id, label, .. } => {
                registry.remove_label(*id, label)?;
            }
        }
        Ok(())
    }

    /// Kurzbezeichnung für Log-Ausgaben
    pub fn describe(&self) -> String {
        match self {
            Self::NodeCreated { node } => format!("Node {} angelegt", node.id()),
            Self::ConnectionAdded { a, b } => format!("Verbindung {}↔{} erstellt", a, b),
            Self::ConnectionRemoved { a, b } => format!("Verbindung {}↔{} entfernt", a, b),
            Self::NodeMoved { id, .. } => format!("Node {} verschoben", id),
            Self::NodeDeleted { node, .. } => format!("Node {} gelöscht", node.id()),
            Self::LabelAdded { id, label } => format!("Label '{}' an Node {} hinzugefügt", label, id),
            Self::LabelRemoved { id, label, .. } => {
                format!("Label '{}' von Node {} entfernt", label, id)
            }
        }
    }
}
