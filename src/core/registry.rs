//! Die zentrale NodeRegistry: alle Nodes, indexiert nach ID, in Einfügereihenfolge.

use super::{GraphError, GraphResult, Node, NodeId};
use glam::DVec2;
use indexmap::IndexMap;

/// Reservierte ID des oberen linken Kalibrierungs-Eckpunkts
pub const UPPER_LEFT_CORNER: NodeId = -1;
/// Reservierte ID des unteren rechten Kalibrierungs-Eckpunkts
pub const LOWER_RIGHT_CORNER: NodeId = -2;

/// Prüft ob eine ID für Kalibrierungs-Eckpunkte reserviert ist.
///
/// Einzige Stelle, an der die Reservierung entschieden wird.
pub fn is_reserved(id: NodeId) -> bool {
    id < 0
}

/// Container für alle Nodes eines Graphen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRegistry {
    /// Alle Nodes, indexiert nach ihrer ID (Reihenfolge = Export-Reihenfolge)
    nodes: IndexMap<NodeId, Node>,
    /// Nächste freie nicht-negative ID, steigt monoton
    next_id: NodeId,
}

impl NodeRegistry {
    /// Erstellt eine leere Registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt einen neuen Node mit der nächsten freien ID an
    pub fn create(&mut self, position: DVec2) -> GraphResult<NodeId> {
        let id = self.next_id;
        let next = id.checked_add(1).ok_or(GraphError::IdOverflow(id))?;
        self.nodes.insert(id, Node::new(id, position));
        self.next_id = next;
        Ok(id)
    }

    /// Fügt einen Node mit expliziter ID am Ende ein.
    ///
    /// Vorhandene Nachbarn im Node werden symmetrisch verknüpft.
    pub fn insert(&mut self, node: Node) -> GraphResult<()> {
        let index = self.nodes.len();
        self.restore(node, index)
    }

    /// Stellt einen Node-Snapshot an seinem früheren Index wieder her,
    /// inklusive der Rückverweise aller Nachbarn.
    pub fn restore(&mut self, node: Node, index: usize) -> GraphResult<()> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        // Erst validieren, dann mutieren
        let next_id = if id >= self.next_id {
            id.checked_add(1).ok_or(GraphError::IdOverflow(id))?
        } else {
            self.next_id
        };
        for neighbor in node.neighbors() {
            if neighbor == id {
                return Err(GraphError::SelfLoop(id));
            }
            if !self.nodes.contains_key(&neighbor) {
                return Err(GraphError::NotFound(neighbor));
            }
        }

        for neighbor in node.neighbors() {
            if let Some(other) = self.nodes.get_mut(&neighbor) {
                other.adjacency.insert(id);
            }
        }
        self.next_id = next_id;
        let index = index.min(self.nodes.len());
        self.nodes.shift_insert(index, id, node);
        Ok(())
    }

    /// Liefert einen Node
    pub fn get(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(&id).ok_or(GraphError::NotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        self.nodes.get_mut(&id).ok_or(GraphError::NotFound(id))
    }

    /// Prüft ob ein Node existiert
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Position eines Nodes in der Einfügereihenfolge
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.get_index_of(&id)
    }

    /// Entfernt einen Node inklusive aller Rückverweise seiner Nachbarn.
    ///
    /// Gibt den Snapshot und den früheren Index zurück.
    pub fn remove(&mut self, id: NodeId) -> GraphResult<(Node, usize)> {
        if is_reserved(id) {
            return Err(GraphError::Protected(id));
        }
        let index = self.index_of(id).ok_or(GraphError::NotFound(id))?;

        let neighbors: Vec<NodeId> = self.nodes[index].neighbors().collect();
        for neighbor in neighbors {
            if let Some(other) = self.nodes.get_mut(&neighbor) {
                other.adjacency.shift_remove(&id);
            }
        }

        let (_, node) = self
            .nodes
            .shift_remove_index(index)
            .ok_or(GraphError::NotFound(id))?;
        Ok((node, index))
    }

    /// Iterator über alle Nodes in Einfügereihenfolge
    pub fn all(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Alle IDs in Einfügereihenfolge
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Entfernt alle Nodes inklusive der Eckpunkte (nur für frischen Import)
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.next_id = 0;
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Anzahl ungerichteter Kanten
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum::<usize>() / 2
    }

    /// Nächste ID, die `create` vergeben würde
    pub fn next_id(&self) -> NodeId {
        self.next_id
    }

    /// Rohkoordinaten der beiden Eckpunkte (oben links, unten rechts), falls vorhanden
    pub fn corners(&self) -> Option<(DVec2, DVec2)> {
        let upper_left = self.nodes.get(&UPPER_LEFT_CORNER)?.position();
        let lower_right = self.nodes.get(&LOWER_RIGHT_CORNER)?.position();
        Some((upper_left, lower_right))
    }

    /// Verbindet zwei Nodes symmetrisch.
    ///
    /// Gibt `false` zurück, wenn die Verbindung bereits bestand.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        self.get(a)?;
        self.get(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        if self.nodes[&a].is_adjacent_to(b) {
            return Ok(false);
        }
        // Beide Seiten existieren, Insert kann nicht mehr fehlschlagen
        self.get_mut(a)?.adjacency.insert(b);
        self.get_mut(b)?.adjacency.insert(a);
        Ok(true)
    }

    /// Trennt zwei Nodes symmetrisch.
    ///
    /// Gibt `false` zurück, wenn keine Verbindung bestand.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> GraphResult<bool> {
        self.get(a)?;
        self.get(b)?;
        if !self.nodes[&a].is_adjacent_to(b) {
            return Ok(false);
        }
        self.get_mut(a)?.adjacency.shift_remove(&b);
        self.get_mut(b)?.adjacency.shift_remove(&a);
        Ok(true)
    }

    /// Prüft ob zwei Nodes verbunden sind
    pub fn are_connected(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes
            .get(&a)
            .is_some_and(|node| node.is_adjacent_to(b))
    }

    /// Setzt die Rohposition eines Nodes (ohne Eckpunkt-Schutz)
    pub fn set_position(&mut self, id: NodeId, position: DVec2) -> GraphResult<DVec2> {
        let node = self.get_mut(id)?;
        let previous = node.position();
        node.set_position(position);
        Ok(previous)
    }

    /// Fügt ein Label hinzu
    pub fn add_label(&mut self, id: NodeId, label: &str) -> GraphResult<()> {
        let node = self.get_mut(id)?;
        if label.trim().is_empty() {
            return Err(GraphError::InvalidLabel(id));
        }
        if node.has_label(label) {
            return Err(GraphError::DuplicateLabel {
                id,
                label: label.to_string(),
            });
        }
        node.labels.insert(label.to_string());
        Ok(())
    }

    /// Entfernt ein Label und gibt seine frühere Position zurück
    pub fn remove_label(&mut self, id: NodeId, label: &str) -> GraphResult<usize> {
        let node = self.get_mut(id)?;
        match node.labels.shift_remove_full(label) {
            Some((index, _)) => Ok(index),
            None => Err(GraphError::LabelNotFound {
                id,
                label: label.to_string(),
            }),
        }
    }

    /// Fügt ein zuvor entferntes Label an seiner alten Position wieder ein
    pub fn restore_label(&mut self, id: NodeId, label: &str, index: usize) -> GraphResult<()> {
        self.add_label(id, label)?;
        let node = self.get_mut(id)?;
        let last = node.labels.len() - 1;
        node.labels.move_index(last, index.min(last));
        Ok(())
    }

    /// Findet alle Nodes mit dem gegebenen Label
    pub fn find_by_label<'a>(&'a self, label: &'a str) -> impl Iterator<Item = NodeId> + 'a {
        self.nodes
            .values()
            .filter(move |node| node.has_label(label))
            .map(Node::id)
    }

    /// Prüft die Symmetrie- und Referenz-Invarianten (für Tests und Debug-Asserts)
    pub fn is_consistent(&self) -> bool {
        self.nodes.iter().all(|(&id, node)| {
            node.id() == id
                && node.neighbors().all(|n| {
                    n != id && self.nodes.get(&n).is_some_and(|other| other.is_adjacent_to(id))
                })
        })
    }
}
