use super::EditEvent;
use crate::core::{GraphResult, NodeRegistry};
use crate::shared::HISTORY_MAX_DEPTH;

/// Lineare Undo/Redo-Historie über [`EditEvent`]s.
///
/// `events[..cursor]` sind angewendet (undo-fähig), `events[cursor..]` sind
/// rückgängig gemacht und nur für Redo aufbewahrt.
#[derive(Debug, Clone)]
pub struct EditEventLog {
    events: Vec<EditEvent>,
    cursor: usize,
    max_depth: usize,
}

impl EditEventLog {
    /// Erstellt eine neue Historie mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            events: Vec::with_capacity(max_depth.min(1024)),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Zeichnet ein bereits angewendetes Event auf und verwirft den Redo-Bereich.
    pub fn record(&mut self, event: EditEvent) {
        self.events.truncate(self.cursor);
        if self.events.len() >= self.max_depth {
            self.events.remove(0);
        }
        log::debug!("History: {}", event.describe());
        self.events.push(event);
        self.cursor = self.events.len();
    }

    /// Macht das letzte angewendete Event rückgängig.
    ///
    /// Gibt `Ok(false)` zurück, wenn nichts rückgängig zu machen ist.
    /// Schlägt das Invertieren fehl, bleibt der Cursor unverändert.
    pub fn undo(&mut self, registry: &mut NodeRegistry) -> GraphResult<bool> {
        if self.cursor == 0 {
            return Ok(false);
        }
        self.events[self.cursor - 1].undo(registry)?;
        self.cursor -= 1;
        Ok(true)
    }

    /// Wendet das nächste rückgängig gemachte Event erneut an.
    pub fn redo(&mut self, registry: &mut NodeRegistry) -> GraphResult<bool> {
        if self.cursor == self.events.len() {
            return Ok(false);
        }
        self.events[self.cursor].redo(registry)?;
        self.cursor += 1;
        Ok(true)
    }

    /// Verwirft die gesamte Historie (bei jedem Import).
    pub fn clear(&mut self) {
        self.events.clear();
        self.cursor = 0;
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.events.len()
    }

    /// Position des Cursors (Anzahl angewendeter Events)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gesamtzahl der Events (angewendet und rückgängig gemacht)
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Gibt `true` zurück, wenn keine Events vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Events.
    pub fn events(&self) -> &[EditEvent] {
        &self.events
    }
}

impl Default for EditEventLog {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn registry_with_nodes(count: usize) -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        for i in 0..count {
            let f = i as f64;
            registry.create(DVec2::new(f * 10.0, f * 7.0)).unwrap();
        }
        registry
    }

    fn connect_and_record(log: &mut EditEventLog, registry: &mut NodeRegistry, a: i64, b: i64) {
        registry.connect(a, b).expect("Verbindung erwartet");
        log.record(EditEvent::ConnectionAdded { a, b });
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let mut registry = registry_with_nodes(2);
        let mut log = EditEventLog::new_with_capacity(10);
        assert!(!log.can_undo());
        assert!(!log.can_redo());
        assert!(!log.undo(&mut registry).unwrap());
        assert!(!log.redo(&mut registry).unwrap());
    }

    #[test]
    fn record_enables_undo() {
        let mut registry = registry_with_nodes(2);
        let mut log = EditEventLog::new_with_capacity(10);
        connect_and_record(&mut log, &mut registry, 0, 1);
        assert!(log.can_undo());
        assert!(!log.can_redo());
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn undo_then_redo_moves_cursor_and_registry() {
        let mut registry = registry_with_nodes(3);
        let mut log = EditEventLog::new_with_capacity(10);
        connect_and_record(&mut log, &mut registry, 0, 1);
        connect_and_record(&mut log, &mut registry, 1, 2);

        assert!(log.undo(&mut registry).unwrap());
        assert!(!registry.are_connected(1, 2));
        assert!(registry.are_connected(0, 1));
        assert_eq!(log.cursor(), 1);
        assert!(log.can_redo());

        assert!(log.redo(&mut registry).unwrap());
        assert!(registry.are_connected(1, 2));
        assert_eq!(log.cursor(), 2);
        assert!(!log.can_redo());
    }

    #[test]
    fn new_record_truncates_redo_tail() {
        let mut registry = registry_with_nodes(4);
        let mut log = EditEventLog::new_with_capacity(10);
        connect_and_record(&mut log, &mut registry, 0, 1);
        connect_and_record(&mut log, &mut registry, 1, 2);
        log.undo(&mut registry).unwrap();
        log.undo(&mut registry).unwrap();
        assert!(log.can_redo());

        connect_and_record(&mut log, &mut registry, 2, 3);
        assert!(!log.can_redo());
        assert_eq!(log.len(), 1);
        assert!(!log.redo(&mut registry).unwrap());
        assert!(!registry.are_connected(0, 1));
    }

    #[test]
    fn respects_max_depth() {
        let mut registry = registry_with_nodes(6);
        let mut log = EditEventLog::new_with_capacity(3);
        for i in 0..5 {
            connect_and_record(&mut log, &mut registry, i, i + 1);
        }

        // Nur 3 Undo-Schritte sollten möglich sein
        let mut undo_count = 0;
        while log.undo(&mut registry).unwrap() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        assert!(registry.are_connected(0, 1));
        assert!(registry.are_connected(1, 2));
        assert!(!registry.are_connected(2, 3));
    }

    #[test]
    fn failed_undo_keeps_cursor() {
        let mut registry = registry_with_nodes(2);
        let mut log = EditEventLog::new_with_capacity(10);
        connect_and_record(&mut log, &mut registry, 0, 1);
        registry.clear();

        assert!(log.undo(&mut registry).is_err());
        assert_eq!(log.cursor(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut registry = registry_with_nodes(2);
        let mut log = EditEventLog::new_with_capacity(10);
        connect_and_record(&mut log, &mut registry, 0, 1);
        log.undo(&mut registry).unwrap();
        log.clear();
        assert!(log.is_empty());
        assert!(!log.can_undo());
        assert!(!log.can_redo());
    }
}
