//! CSV-Export der NodeRegistry.
//!
//! Zahlen werden mit `Display` geschrieben (kürzeste eindeutige Darstellung),
//! ein erneuter Import liefert daher exakt dieselben Werte.

use crate::core::{NodeId, NodeRegistry};
use crate::shared::EditorOptions;
use anyhow::{Context, Result};
use csv::{Writer, WriterBuilder};
use std::io::Write;

fn csv_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new().flexible(true).from_writer(out)
}

/// Schreibt die Koordinaten-Datei: `id,x,y,label...`
pub fn write_coords<W: Write>(
    registry: &NodeRegistry,
    out: W,
    options: &EditorOptions,
) -> Result<()> {
    let mut writer = csv_writer(out);
    if options.write_csv_header {
        writer
            .write_record(["id", "x", "y", "labels"])
            .context("Kopfzeile der Koordinaten-Datei fehlgeschlagen")?;
    }

    for node in registry.all() {
        let position = node.position();
        let mut record = vec![
            node.id().to_string(),
            position.x.to_string(),
            position.y.to_string(),
        ];
        record.extend(node.labels().map(str::to_string));
        writer
            .write_record(&record)
            .with_context(|| format!("Koordinaten von Node {} fehlgeschlagen", node.id()))?;
    }

    writer.flush().context("Koordinaten-Datei konnte nicht geschrieben werden")?;
    log::info!("{} Node-Koordinaten exportiert", registry.len());
    Ok(())
}

/// Schreibt die Verbindungs-Datei: `id,neighbor...`
///
/// Nachbarn stehen in Registry-Reihenfolge. Mit `export_edges_once` wird jede
/// Kante nur beim zuerst eingefügten Endpunkt aufgeführt.
pub fn write_connections<W: Write>(
    registry: &NodeRegistry,
    out: W,
    options: &EditorOptions,
) -> Result<()> {
    let mut writer = csv_writer(out);
    if options.write_csv_header {
        writer
            .write_record(["id", "neighbors"])
            .context("Kopfzeile der Verbindungs-Datei fehlgeschlagen")?;
    }

    for (index, node) in registry.all().enumerate() {
        let mut neighbors: Vec<(usize, NodeId)> = node
            .neighbors()
            .filter_map(|n| registry.index_of(n).map(|i| (i, n)))
            .filter(|&(i, _)| !options.export_edges_once || i > index)
            .collect();
        neighbors.sort_unstable();

        let mut record = Vec::with_capacity(neighbors.len() + 1);
        record.push(node.id().to_string());
        record.extend(neighbors.iter().map(|(_, n)| n.to_string()));
        writer
            .write_record(&record)
            .with_context(|| format!("Verbindungen von Node {} fehlgeschlagen", node.id()))?;
    }

    writer.flush().context("Verbindungs-Datei konnte nicht geschrieben werden")?;
    log::info!("{} Verbindungen exportiert", registry.edge_count());
    Ok(())
}

/// Schreibt die Label-Datei: `label,id` pro Zuordnung.
pub fn write_labels<W: Write>(
    registry: &NodeRegistry,
    out: W,
    options: &EditorOptions,
) -> Result<()> {
    let mut writer = csv_writer(out);
    if options.write_csv_header {
        writer
            .write_record(["Label", "Node ID"])
            .context("Kopfzeile der Label-Datei fehlgeschlagen")?;
    }

    let mut count = 0usize;
    for node in registry.all() {
        let id = node.id().to_string();
        for label in node.labels() {
            writer
                .write_record([label, id.as_str()])
                .with_context(|| format!("Label '{}' von Node {} fehlgeschlagen", label, id))?;
            count += 1;
        }
    }

    writer.flush().context("Label-Datei konnte nicht geschrieben werden")?;
    log::info!("{} Labels exportiert", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Node, LOWER_RIGHT_CORNER, UPPER_LEFT_CORNER};
    use glam::DVec2;

    fn sample_registry() -> NodeRegistry {
        let mut registry = NodeRegistry::new();
        registry
            .insert(Node::new(UPPER_LEFT_CORNER, DVec2::new(0.0, 0.0)))
            .unwrap();
        registry
            .insert(Node::new(LOWER_RIGHT_CORNER, DVec2::new(100.0, 100.0)))
            .unwrap();
        let a = registry.create(DVec2::new(10.5, 0.1)).unwrap();
        let b = registry.create(DVec2::new(-3.0, 42.0)).unwrap();
        registry.connect(b, a).unwrap();
        registry.connect(a, UPPER_LEFT_CORNER).unwrap();
        registry.add_label(a, "Mensa").unwrap();
        registry.add_label(a, "Eingang, Süd").unwrap();
        registry
    }

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("Export erwartet");
        String::from_utf8(buffer).expect("UTF-8 erwartet")
    }

    #[test]
    fn test_write_coords_with_labels() {
        let registry = sample_registry();
        let options = EditorOptions::default();
        let text = render(|out| write_coords(&registry, out, &options));
        assert_eq!(
            text,
            "id,x,y,labels\n-1,0,0\n-2,100,100\n0,10.5,0.1,Mensa,\"Eingang, Süd\"\n1,-3,42\n"
        );
    }

    #[test]
    fn test_write_connections_lists_neighbors_in_registry_order() {
        let registry = sample_registry();
        let options = EditorOptions {
            write_csv_header: false,
            ..EditorOptions::default()
        };
        let text = render(|out| write_connections(&registry, out, &options));
        assert_eq!(text, "-1,0\n-2\n0,-1,1\n1,0\n");
    }

    #[test]
    fn test_write_connections_edges_once() {
        let registry = sample_registry();
        let options = EditorOptions {
            export_edges_once: true,
            ..EditorOptions::default()
        };
        let text = render(|out| write_connections(&registry, out, &options));
        assert_eq!(text, "id,neighbors\n-1,0\n-2\n0,1\n1\n");
    }

    #[test]
    fn test_write_labels() {
        let registry = sample_registry();
        let options = EditorOptions::default();
        let text = render(|out| write_labels(&registry, out, &options));
        assert_eq!(text, "Label,Node ID\nMensa,0\n\"Eingang, Süd\",0\n");
    }
}
