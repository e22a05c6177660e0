//! Node-Verbindungs-Datei: `id, neighbor[, neighbor...]`.

use super::reader::{first_field_not_id, parse_id, Record, Records};
use crate::core::{GraphError, GraphResult, NodeId};
use std::io::Read;

/// Eine geparste Zeile der Verbindungs-Datei
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionRow {
    /// Zeilennummer in der Quelldatei
    pub line: u64,
    pub id: NodeId,
    /// Nachbarn in Dateireihenfolge (kann leer sein)
    pub neighbors: Vec<NodeId>,
}

/// Parst eine Verbindungs-Datei zeilenweise.
///
/// Zeilen mit nur einer ID sind gültig (Node ohne Nachbarn).
pub fn parse_connections<R: Read>(input: R) -> impl Iterator<Item = GraphResult<ConnectionRow>> {
    Records::new(input, first_field_not_id).map(|record| record.and_then(parse_row))
}

fn parse_row(record: Record) -> GraphResult<ConnectionRow> {
    let line = record.line;
    let len = record.len();
    if len == 0 {
        return Err(GraphError::malformed(line, "Zeile ohne Node-ID"));
    }

    let id = parse_id(line, record.field(0).unwrap_or_default())?;
    let neighbors = record
        .fields
        .iter()
        .take(len)
        .skip(1)
        .filter(|field| !field.is_empty())
        .map(|field| parse_id(line, field))
        .collect::<GraphResult<Vec<NodeId>>>()?;

    Ok(ConnectionRow {
        line,
        id,
        neighbors,
    })
}
