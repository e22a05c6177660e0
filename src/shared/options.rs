//! Zentrale Konfiguration für den Node-Manager.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Historie ────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_MAX_DEPTH: usize = 500;

// ── Kartenbild ──────────────────────────────────────────────────────

/// Standard-Render-Breite des Kalibrierungsrechtecks in Pixeln.
pub const RENDER_WIDTH: f64 = 1000.0;
/// Standard-Render-Höhe des Kalibrierungsrechtecks in Pixeln.
pub const RENDER_HEIGHT: f64 = 1000.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `node_manager.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Historie ────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte (älteste Events werden verworfen)
    pub history_max_depth: usize,

    // ── Kartenbild ──────────────────────────────────────────────
    /// Render-Breite des Rechtecks zwischen den Eckpunkten
    pub render_width: f64,
    /// Render-Höhe des Rechtecks zwischen den Eckpunkten
    pub render_height: f64,

    // ── CSV-Export ──────────────────────────────────────────────
    /// Kopfzeile in exportierte CSV-Dateien schreiben
    #[serde(default = "default_write_csv_header")]
    pub write_csv_header: bool,
    /// Jede Verbindung nur einmal exportieren (statt einmal pro Endpunkt)
    #[serde(default)]
    pub export_edges_once: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_max_depth: HISTORY_MAX_DEPTH,
            render_width: RENDER_WIDTH,
            render_height: RENDER_HEIGHT,
            write_csv_header: true,
            export_edges_once: false,
        }
    }
}

/// Serde-Default für `write_csv_header` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_write_csv_header() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("node-manager"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("node_manager.toml")
    }
}
