//! Use-Case-Funktionen für Import und Export.
//! Alle Stream-Operationen (I/O) sind hier zentralisiert.
//!
//! Ein Import liest zuerst alle Quellen vollständig und parst sie. Erst danach
//! werden History und Registry geleert und neu befüllt. Fehlerhafte Zeilen
//! (auch ungültiges UTF-8) landen als Diagnose im [`ImportReport`],
//! I/O-Fehler brechen vorher ab.

use crate::app::AppState;
use crate::core::{
    is_reserved, CoordinateScale, GraphError, GraphResult, Node, NodeId, LOWER_RIGHT_CORNER,
    UPPER_LEFT_CORNER,
};
use crate::csv_io::{self, ArtifactKind, ConnectionRow, CoordRow, LabelRow, Manifest};
use anyhow::{Context, Result};
use glam::DVec2;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Dateiname der Koordinaten-Datei beim Verzeichnis-Export
pub const COORDS_FILE_NAME: &str = "nodeData.csv";
/// Dateiname der Verbindungs-Datei beim Verzeichnis-Export
pub const CONNECTIONS_FILE_NAME: &str = "nodeConnections.csv";
/// Dateiname der Label-Datei beim Verzeichnis-Export
pub const LABELS_FILE_NAME: &str = "nodeLabels.csv";

/// Ergebnis eines Imports
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Importierte Nodes (inklusive Eckpunkte aus der Datei)
    pub nodes: usize,
    /// Neu erstellte Verbindungen
    pub connections: usize,
    /// Doppelte oder gespiegelte Verbindungszeilen (still verworfen)
    pub duplicate_edges: usize,
    /// Zugeordnete Labels
    pub labels: usize,
    /// Eckpunkte, die in der Datei fehlten und neu angelegt wurden
    pub recreated_corners: Vec<NodeId>,
    /// Übersprungene Zeilen
    pub diagnostics: Vec<GraphError>,
    /// Kalibrierung aus den Eckpunkten fehlgeschlagen (Skalierung bleibt Identität)
    pub scale_error: Option<GraphError>,
}

impl ImportReport {
    /// `true`, wenn weder Zeilen übersprungen wurden noch die Kalibrierung scheiterte
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.scale_error.is_none()
    }

    /// Einzeilige Zusammenfassung für Statusanzeigen
    pub fn summary(&self) -> String {
        format!(
            "{} Nodes, {} Verbindungen ({} Duplikate), {} Labels, {} übersprungene Zeilen",
            self.nodes,
            self.connections,
            self.duplicate_edges,
            self.labels,
            self.diagnostics.len()
        )
    }

    fn reject(&mut self, err: GraphError) {
        log::warn!("Import: {}", err);
        self.diagnostics.push(err);
    }
}

/// Quelle für Artefakte, die über ein Manifest referenziert werden.
///
/// Der Kern führt selbst keine Netzwerkzugriffe aus; der Aufrufer liefert
/// z.B. einen HTTP-Client oder ein lokales Verzeichnis.
pub trait ArtifactSource {
    /// Öffnet das Artefakt hinter `url` als Byte-Stream.
    fn open(&self, url: &str) -> Result<Box<dyn Read>>;
}

/// Importiert Koordinaten und Verbindungen und ersetzt den aktuellen Graphen.
pub fn import_graph<C: Read, N: Read>(
    state: &mut AppState,
    coords: C,
    connections: N,
) -> Result<ImportReport> {
    let coords = read_source(coords, "Koordinaten-Datei")?;
    let connections = read_source(connections, "Verbindungs-Datei")?;
    Ok(apply_import(state, &coords, &connections, None))
}

/// Wie [`import_graph`], zusätzlich mit separater Label-Datei.
pub fn import_graph_with_labels<C: Read, N: Read, L: Read>(
    state: &mut AppState,
    coords: C,
    connections: N,
    labels: L,
) -> Result<ImportReport> {
    let coords = read_source(coords, "Koordinaten-Datei")?;
    let connections = read_source(connections, "Verbindungs-Datei")?;
    let labels = read_source(labels, "Label-Datei")?;
    Ok(apply_import(state, &coords, &connections, Some(&labels)))
}

/// Ordnet Labels aus einer Label-Datei den vorhandenen Nodes zu.
///
/// Die History wird verworfen, da die Zuordnungen nicht einzeln
/// rückgängig gemacht werden können.
pub fn import_labels<L: Read>(state: &mut AppState, labels: L) -> Result<ImportReport> {
    let labels = read_source(labels, "Label-Datei")?;
    let mut report = ImportReport::default();
    let rows = collect_rows(csv_io::parse_labels(labels.as_slice()), &mut report);

    state.history.clear();
    apply_label_rows(state, rows, &mut report);

    log::info!("Labels importiert: {}", report.summary());
    Ok(report)
}

/// Importiert alle im Manifest referenzierten Daten über `source`.
///
/// Koordinaten und Verbindungen sind Pflicht, Labels optional.
pub fn import_from_manifest(
    state: &mut AppState,
    manifest: &Manifest,
    source: &dyn ArtifactSource,
) -> Result<ImportReport> {
    let coords = fetch(manifest, source, ArtifactKind::Coordinates)?
        .context("Manifest enthält keine Node-Koordinaten")?;
    let connections = fetch(manifest, source, ArtifactKind::Connections)?
        .context("Manifest enthält keine Node-Verbindungen")?;
    let labels = fetch(manifest, source, ArtifactKind::Labels)?;

    Ok(apply_import(
        state,
        &coords,
        &connections,
        labels.as_deref(),
    ))
}

/// Erstellt ein Manifest aus hochgeladenen Datei-IDs (Download-Links).
pub fn build_manifest<I, S>(file_ids: I) -> Manifest
where
    I: IntoIterator<Item = (ArtifactKind, S)>,
    S: AsRef<str>,
{
    let mut manifest = Manifest::new();
    for (kind, file_id) in file_ids {
        manifest.insert(kind, Manifest::download_url(file_id.as_ref()));
    }
    manifest
}

/// Schreibt die Koordinaten-Datei.
pub fn export_coords<W: Write>(state: &AppState, out: W) -> Result<()> {
    csv_io::write_coords(&state.registry, out, &state.options)
}

/// Schreibt die Verbindungs-Datei.
pub fn export_connections<W: Write>(state: &AppState, out: W) -> Result<()> {
    csv_io::write_connections(&state.registry, out, &state.options)
}

/// Schreibt die Label-Datei.
pub fn export_labels<W: Write>(state: &AppState, out: W) -> Result<()> {
    csv_io::write_labels(&state.registry, out, &state.options)
}

/// Schreibt alle drei CSV-Dateien in ein Verzeichnis.
pub fn export_to_dir(state: &AppState, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Verzeichnis {} nicht anlegbar", dir.display()))?;

    export_coords(state, create_file(&dir.join(COORDS_FILE_NAME))?)?;
    export_connections(state, create_file(&dir.join(CONNECTIONS_FILE_NAME))?)?;
    export_labels(state, create_file(&dir.join(LABELS_FILE_NAME))?)?;

    log::info!("Export nach {} abgeschlossen", dir.display());
    Ok(())
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Datei {} nicht anlegbar", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Liest eine Quelle vollständig als Bytes; die Kodierung prüft der CSV-Leser pro Zeile.
fn read_source<R: Read>(mut input: R, what: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .with_context(|| format!("{} konnte nicht gelesen werden", what))?;
    Ok(bytes)
}

fn fetch(
    manifest: &Manifest,
    source: &dyn ArtifactSource,
    kind: ArtifactKind,
) -> Result<Option<Vec<u8>>> {
    let Some(url) = manifest.url_for(kind) else {
        return Ok(None);
    };
    let reader = source
        .open(url)
        .with_context(|| format!("'{}' nicht abrufbar: {}", kind.title(), url))?;
    read_source(reader, kind.title()).map(Some)
}

fn collect_rows<T>(
    rows: impl Iterator<Item = GraphResult<T>>,
    report: &mut ImportReport,
) -> Vec<T> {
    let mut valid = Vec::new();
    for row in rows {
        match row {
            Ok(row) => valid.push(row),
            Err(err) => report.reject(err),
        }
    }
    valid
}

fn apply_import(
    state: &mut AppState,
    coords: &[u8],
    connections: &[u8],
    labels: Option<&[u8]>,
) -> ImportReport {
    let mut report = ImportReport::default();

    // Erst alles parsen, dann den bestehenden Graphen ersetzen
    let coord_rows = collect_rows(csv_io::parse_coords(coords), &mut report);
    let connection_rows = collect_rows(csv_io::parse_connections(connections), &mut report);
    let label_rows = labels
        .map(|bytes| collect_rows(csv_io::parse_labels(bytes), &mut report))
        .unwrap_or_default();

    state.history.clear();
    state.registry.clear();

    insert_nodes(state, coord_rows, &mut report);
    recreate_missing_corners(state, &mut report);
    apply_connection_rows(state, connection_rows, &mut report);
    apply_label_rows(state, label_rows, &mut report);
    recalibrate(state, &mut report);

    debug_assert!(state.registry.is_consistent());
    log::info!("Import abgeschlossen: {}", report.summary());
    report
}

fn insert_nodes(state: &mut AppState, rows: Vec<CoordRow>, report: &mut ImportReport) {
    for row in rows {
        match state.registry.insert(Node::new(row.id, row.position)) {
            Ok(()) => report.nodes += 1,
            Err(GraphError::DuplicateId(id)) => {
                report.reject(GraphError::malformed(
                    row.line,
                    format!("doppelte Node-ID {}", id),
                ));
                continue;
            }
            Err(err) => {
                report.reject(GraphError::malformed(row.line, err.to_string()));
                continue;
            }
        }
        for label in &row.labels {
            apply_label(state, row.line, row.id, label, report);
        }
    }
}

/// Legt fehlende Eckpunkte an der Bounding-Box der importierten Nodes an.
fn recreate_missing_corners(state: &mut AppState, report: &mut ImportReport) {
    let missing: Vec<NodeId> = [UPPER_LEFT_CORNER, LOWER_RIGHT_CORNER]
        .into_iter()
        .filter(|&id| !state.registry.contains(id))
        .collect();
    if missing.is_empty() {
        return;
    }

    let (min, max) = state
        .registry
        .all()
        .filter(|node| !is_reserved(node.id()))
        .map(Node::position)
        .fold(None, |bounds: Option<(DVec2, DVec2)>, p| match bounds {
            Some((min, max)) => Some((min.min(p), max.max(p))),
            None => Some((p, p)),
        })
        .unwrap_or((DVec2::ZERO, DVec2::ONE));

    for id in missing {
        let position = if id == UPPER_LEFT_CORNER { min } else { max };
        match state.registry.insert(Node::new(id, position)) {
            Ok(()) => {
                log::warn!(
                    "Eckpunkt {} fehlte, neu angelegt bei ({}, {})",
                    id,
                    position.x,
                    position.y
                );
                report.recreated_corners.push(id);
            }
            Err(err) => report.reject(err),
        }
    }
}

fn apply_connection_rows(
    state: &mut AppState,
    rows: Vec<ConnectionRow>,
    report: &mut ImportReport,
) {
    for row in rows {
        if row.neighbors.is_empty() && !state.registry.contains(row.id) {
            report.reject(GraphError::malformed(
                row.line,
                GraphError::NotFound(row.id).to_string(),
            ));
            continue;
        }
        for neighbor in row.neighbors {
            match state.registry.connect(row.id, neighbor) {
                Ok(true) => report.connections += 1,
                Ok(false) => report.duplicate_edges += 1,
                Err(err) => report.reject(GraphError::malformed(row.line, err.to_string())),
            }
        }
    }
    if report.duplicate_edges > 0 {
        log::debug!(
            "{} doppelte Verbindungszeilen ignoriert",
            report.duplicate_edges
        );
    }
}

fn apply_label_rows(state: &mut AppState, rows: Vec<LabelRow>, report: &mut ImportReport) {
    for row in rows {
        apply_label(state, row.line, row.id, &row.label, report);
    }
}

fn apply_label(
    state: &mut AppState,
    line: u64,
    id: NodeId,
    label: &str,
    report: &mut ImportReport,
) {
    match state.registry.add_label(id, label) {
        Ok(()) => report.labels += 1,
        Err(GraphError::DuplicateLabel { .. }) => {
            log::debug!("Label '{}' an Node {} bereits vorhanden", label, id);
        }
        Err(err) => report.reject(GraphError::malformed(line, err.to_string())),
    }
}

fn recalibrate(state: &mut AppState, report: &mut ImportReport) {
    state.scale = CoordinateScale::default();
    let Some((upper_left, lower_right)) = state.registry.corners() else {
        return;
    };
    let size = DVec2::new(state.options.render_width, state.options.render_height);
    match CoordinateScale::new(upper_left, lower_right, size) {
        Ok(scale) => state.scale = scale,
        Err(err) => {
            log::warn!("Kalibrierung fehlgeschlagen: {}", err);
            report.scale_error = Some(err);
        }
    }
}
