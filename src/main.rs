//! Node Manager.
//!
//! Importiert einen Wegpunkt-Graphen aus CSV-Dateien, prüft ihn und
//! exportiert ihn optional normalisiert in ein Verzeichnis.

use anyhow::{Context, Result};
use clap::Parser;
use node_manager::app::use_cases::file_io;
use node_manager::{AppState, EditorOptions, ImportReport};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    AppRunner::run()
}

/// Kommandozeilen-Argumente
#[derive(Debug, Parser)]
#[command(
    name = "node-manager",
    version,
    about = "Importiert einen Wegpunkt-Graphen aus CSV-Dateien und exportiert ihn normalisiert"
)]
struct Cli {
    /// Koordinaten-Datei (id, x, y[, label...])
    coords: PathBuf,
    /// Verbindungs-Datei (id[, nachbar...])
    connections: PathBuf,
    /// Optionale Label-Datei (Label, Node ID)
    labels: Option<PathBuf>,
    /// Zielverzeichnis für den Export aller drei CSV-Dateien
    #[arg(long, value_name = "VERZEICHNIS")]
    out: Option<PathBuf>,
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Node Manager v{} startet...", env!("CARGO_PKG_VERSION"));

        let args = Cli::parse();

        // Optionen aus TOML laden (oder Standardwerte)
        let options = EditorOptions::load_from_file(&EditorOptions::config_path());
        let mut state = AppState::with_options(options);

        let coords = open(&args.coords)?;
        let connections = open(&args.connections)?;
        let report = match &args.labels {
            Some(path) => {
                file_io::import_graph_with_labels(&mut state, coords, connections, open(path)?)?
            }
            None => file_io::import_graph(&mut state, coords, connections)?,
        };
        print_report(&report);

        if let Some(dir) = &args.out {
            file_io::export_to_dir(&state, dir)?;
        }
        Ok(())
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("{} nicht lesbar", path.display()))?;
    Ok(BufReader::new(file))
}

fn print_report(report: &ImportReport) {
    println!("{}", report.summary());
    for corner in &report.recreated_corners {
        println!("  Eckpunkt {} neu angelegt", corner);
    }
    for diagnostic in &report.diagnostics {
        println!("  {}", diagnostic);
    }
    if let Some(err) = &report.scale_error {
        println!("  Kalibrierung: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_positional_files_and_out_dir() {
        let cli = Cli::try_parse_from([
            "node-manager",
            "nodeData.csv",
            "nodeConnections.csv",
            "nodeLabels.csv",
            "--out",
            "export",
        ])
        .expect("gültige Argumente");
        assert_eq!(cli.coords, PathBuf::from("nodeData.csv"));
        assert_eq!(cli.connections, PathBuf::from("nodeConnections.csv"));
        assert_eq!(cli.labels, Some(PathBuf::from("nodeLabels.csv")));
        assert_eq!(cli.out, Some(PathBuf::from("export")));
    }

    #[test]
    fn test_cli_requires_connections_file() {
        assert!(Cli::try_parse_from(["node-manager", "nodeData.csv"]).is_err());
        assert!(Cli::try_parse_from(["node-manager", "a.csv", "b.csv", "c.csv", "d.csv"]).is_err());
    }
}
