//! Manifest-Datei: Tabelle `Data, URL`, die jedem Artefakt eine Quelle zuordnet.

use super::reader::Records;
use crate::core::GraphError;
use anyhow::{Context, Result};
use csv::StringRecord;
use indexmap::IndexMap;
use std::io::{Read, Write};

/// Präfix für direkte Download-Links freigegebener Dateien
pub const DOWNLOAD_URL_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// Art eines Artefakts im Manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Coordinates,
    Connections,
    Labels,
    MapImage,
}

impl ArtifactKind {
    /// Alle Artefakte in Manifest-Reihenfolge
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Coordinates,
        ArtifactKind::Connections,
        ArtifactKind::Labels,
        ArtifactKind::MapImage,
    ];

    /// Titel in der `Data`-Spalte
    pub fn title(self) -> &'static str {
        match self {
            ArtifactKind::Coordinates => "Node coordinates",
            ArtifactKind::Connections => "Node connections",
            ArtifactKind::Labels => "labels",
            ArtifactKind::MapImage => "map image",
        }
    }

    /// Erkennt ein Artefakt am Titel (Groß-/Kleinschreibung egal)
    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.title().eq_ignore_ascii_case(title.trim()))
    }
}

/// Zuordnung Artefakt → URL in Dateireihenfolge
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    entries: IndexMap<ArtifactKind, String>,
}

impl Manifest {
    /// Leeres Manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Parst eine Manifest-Datei.
    ///
    /// Die erste Zeile ist immer die Kopfzeile. Unbekannte Titel und
    /// unvollständige Zeilen werden als Diagnose zurückgegeben.
    pub fn parse<R: Read>(input: R) -> (Self, Vec<GraphError>) {
        let mut manifest = Self::new();
        let mut diagnostics = Vec::new();

        for record in Records::new(input, always_header) {
            let row = record.and_then(|record| {
                let line = record.line;
                if record.len() != 2 {
                    return Err(GraphError::malformed(
                        line,
                        format!("erwartet 2 Spalten, gefunden {}", record.len()),
                    ));
                }
                let title = record.field(0).unwrap_or_default();
                let kind = ArtifactKind::from_title(title).ok_or_else(|| {
                    GraphError::malformed(line, format!("unbekanntes Artefakt '{}'", title))
                })?;
                Ok((kind, record.field(1).unwrap_or_default().to_string()))
            });

            match row {
                Ok((kind, url)) => manifest.insert(kind, url),
                Err(err) => {
                    log::warn!("Manifest: {}", err);
                    diagnostics.push(err);
                }
            }
        }

        (manifest, diagnostics)
    }

    /// Schreibt das Manifest inklusive Kopfzeile.
    pub fn write<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        writer
            .write_record(["Data", "URL"])
            .context("Manifest-Kopfzeile konnte nicht geschrieben werden")?;
        for (kind, url) in &self.entries {
            writer
                .write_record([kind.title(), url.as_str()])
                .with_context(|| format!("Manifest-Eintrag '{}' fehlgeschlagen", kind.title()))?;
        }
        writer.flush().context("Manifest konnte nicht geschrieben werden")?;
        Ok(())
    }

    /// Setzt (oder ersetzt) die URL eines Artefakts.
    pub fn insert(&mut self, kind: ArtifactKind, url: impl Into<String>) {
        self.entries.insert(kind, url.into());
    }

    /// URL eines Artefakts
    pub fn url_for(&self, kind: ArtifactKind) -> Option<&str> {
        self.entries.get(&kind).map(String::as_str)
    }

    /// Datei-ID einer Freigabe-URL (Query-Parameter `id`)
    pub fn file_id(url: &str) -> Option<&str> {
        let (_, query) = url.split_once('?')?;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("id="))
            .filter(|id| !id.is_empty())
    }

    /// Direkter Download-Link zu einer Datei-ID
    pub fn download_url(file_id: &str) -> String {
        format!("{}{}", DOWNLOAD_URL_PREFIX, file_id)
    }

    /// Einträge in Dateireihenfolge
    pub fn entries(&self) -> impl Iterator<Item = (ArtifactKind, &str)> {
        self.entries.iter().map(|(kind, url)| (*kind, url.as_str()))
    }

    /// Anzahl der Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, wenn kein Artefakt eingetragen ist
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn always_header(_: &StringRecord) -> bool {
    true
}
