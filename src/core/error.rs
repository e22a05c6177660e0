//! Typisierte Fehler für Graph-Mutationen, Kalibrierung und CSV-Zeilen.

use super::NodeId;
use thiserror::Error;

/// Fehlerarten des Editor-Kerns.
///
/// Fehlgeschlagene Mutationen lassen Registry und Historie unverändert,
/// die UI kann die Meldung direkt anzeigen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// Node-ID existiert nicht
    #[error("Node {0} existiert nicht")]
    NotFound(NodeId),
    /// Operation auf einem reservierten Kalibrierungs-Eckpunkt
    #[error("Node {0} ist ein reservierter Eckpunkt und kann nicht verändert werden")]
    Protected(NodeId),
    /// Verbindung eines Nodes mit sich selbst
    #[error("Self-Loop nicht erlaubt (Node {0})")]
    SelfLoop(NodeId),
    /// Label ist am Node bereits vorhanden
    #[error("Label '{label}' ist an Node {id} bereits vorhanden")]
    DuplicateLabel { id: NodeId, label: String },
    /// Label ist am Node nicht vorhanden
    #[error("Label '{label}' ist an Node {id} nicht vorhanden")]
    LabelNotFound { id: NodeId, label: String },
    /// Leeres Label
    #[error("Leeres Label für Node {0} nicht erlaubt")]
    InvalidLabel(NodeId),
    /// Node-ID ist bereits vergeben
    #[error("Node-ID {0} ist bereits vergeben")]
    DuplicateId(NodeId),
    /// Nach dieser ID ist keine weitere ID mehr darstellbar
    #[error("Node-ID {0} ist zu groß, keine Folge-ID möglich")]
    IdOverflow(NodeId),
    /// Position mit NaN- oder unendlicher Koordinate
    #[error("Ungültige Position ({x}, {y}): Koordinaten müssen endlich sein")]
    InvalidPosition { x: f64, y: f64 },
    /// Kalibrierungsrechteck ohne Ausdehnung
    #[error("Degenerierte Skalierung: Rechteck {width} x {height} hat keine Fläche")]
    DegenerateScale { width: f64, height: f64 },
    /// Nicht lesbare CSV-Zeile (wird beim Import übersprungen)
    #[error("Zeile {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
}

impl GraphError {
    /// Erzeugt einen `MalformedRow`-Fehler.
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}

/// Ergebnis-Typ für Operationen des Editor-Kerns.
pub type GraphResult<T> = Result<T, GraphError>;
