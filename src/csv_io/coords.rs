//! Node-Koordinaten-Datei: `id, x, y[, label...]`.

use super::reader::{first_field_not_id, parse_coordinate, parse_id, Record, Records};
use crate::core::{is_reserved, GraphError, GraphResult, NodeId};
use crate::core::{LOWER_RIGHT_CORNER, UPPER_LEFT_CORNER};
use glam::DVec2;
use std::io::Read;

/// Eine geparste Zeile der Koordinaten-Datei
#[derive(Debug, Clone, PartialEq)]
pub struct CoordRow {
    /// Zeilennummer in der Quelldatei
    pub line: u64,
    pub id: NodeId,
    pub position: DVec2,
    /// Labels aus den Zusatzspalten (ohne leere Felder und Duplikate)
    pub labels: Vec<String>,
}

/// Parst eine Koordinaten-Datei zeilenweise.
///
/// Liefert pro Datenzeile entweder die Zeile oder einen `MalformedRow`-Fehler.
/// Eine Kopfzeile wird übersprungen.
pub fn parse_coords<R: Read>(input: R) -> impl Iterator<Item = GraphResult<CoordRow>> {
    Records::new(input, first_field_not_id).map(|record| record.and_then(parse_row))
}

fn parse_row(record: Record) -> GraphResult<CoordRow> {
    let line = record.line;
    if record.len() < 3 {
        return Err(GraphError::malformed(
            line,
            format!("erwartet mindestens 3 Spalten, gefunden {}", record.len()),
        ));
    }

    let id = parse_id(line, record.field(0).unwrap_or_default())?;
    if is_reserved(id) && id != UPPER_LEFT_CORNER && id != LOWER_RIGHT_CORNER {
        return Err(GraphError::malformed(
            line,
            format!("negative Node-ID {} ist nicht erlaubt", id),
        ));
    }
    let x = parse_coordinate(line, record.field(1).unwrap_or_default())?;
    let y = parse_coordinate(line, record.field(2).unwrap_or_default())?;

    let mut labels: Vec<String> = Vec::new();
    for label in record.fields.iter().skip(3) {
        if !label.is_empty() && !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }

    Ok(CoordRow {
        line,
        id,
        position: DVec2::new(x, y),
        labels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_in_file_order_with_corners() {
        let input = "Node ID,x,y\n-1,0,0\n-2,100,100\n0,10.5,-3.25\n";
        let rows: Vec<CoordRow> = parse_coords(input.as_bytes())
            .collect::<GraphResult<_>>()
            .expect("alle Zeilen gültig");

        let ids: Vec<NodeId> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![-1, -2, 0]);
        assert_eq!(rows[2].position, DVec2::new(10.5, -3.25));
        assert!(rows[2].labels.is_empty());
    }

    #[test]
    fn test_label_columns_are_collected() {
        let input = "12,1,2,Mensa,Eingang,,Mensa\n";
        let row = parse_coords(input.as_bytes())
            .next()
            .expect("eine Zeile")
            .expect("gültige Zeile");
        assert_eq!(row.id, 12);
        assert_eq!(row.labels, vec!["Mensa".to_string(), "Eingang".to_string()]);
    }

    #[test]
    fn test_malformed_rows_do_not_stop_parsing() {
        let input = "1,2,3\n2,abc,3\n3,4\n-7,1,1\n4.5,1,1\n5,6,7\n";
        let results: Vec<GraphResult<CoordRow>> = parse_coords(input.as_bytes()).collect();
        assert_eq!(results.len(), 6);

        let valid: Vec<NodeId> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|r| r.id)
            .collect();
        assert_eq!(valid, vec![1, 5]);

        let lines: Vec<u64> = results
            .iter()
            .filter_map(|r| match r {
                Err(GraphError::MalformedRow { line, .. }) => Some(*line),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![2, 3, 4, 5]);
    }
}
