//! Label-Datei: `label, id` (eine Zeile pro Label-Zuordnung).

use super::reader::{parse_id, Record, Records};
use crate::core::{GraphError, GraphResult, NodeId};
use csv::StringRecord;
use std::io::Read;

/// Eine geparste Zeile der Label-Datei
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRow {
    /// Zeilennummer in der Quelldatei
    pub line: u64,
    pub label: String,
    pub id: NodeId,
}

/// Parst eine Label-Datei zeilenweise.
pub fn parse_labels<R: Read>(input: R) -> impl Iterator<Item = GraphResult<LabelRow>> {
    Records::new(input, second_field_not_id).map(|record| record.and_then(parse_row))
}

fn second_field_not_id(fields: &StringRecord) -> bool {
    fields.get(1).is_some_and(|f| f.parse::<NodeId>().is_err())
}

fn parse_row(record: Record) -> GraphResult<LabelRow> {
    let line = record.line;
    if record.len() != 2 {
        return Err(GraphError::malformed(
            line,
            format!("erwartet 2 Spalten, gefunden {}", record.len()),
        ));
    }
    let label = record.field(0).unwrap_or_default();
    if label.is_empty() {
        return Err(GraphError::malformed(line, "leeres Label"));
    }
    let id = parse_id(line, record.field(1).unwrap_or_default())?;
    Ok(LabelRow {
        line,
        label: label.to_string(),
        id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels_with_header_and_quotes() {
        let input = "Label,Node ID\nMensa,4\n\"Hörsaal 1, Nord\",7\n,3\n";
        let results: Vec<GraphResult<LabelRow>> = parse_labels(input.as_bytes()).collect();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().id, 4);
        assert_eq!(results[1].as_ref().unwrap().label, "Hörsaal 1, Nord");
        assert!(results[2].is_err());
    }
}
