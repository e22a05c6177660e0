//! CSV Import/Export für Node-Koordinaten, Verbindungen, Labels und Manifeste.
//!
//! Alle Parser sind lazy: sie liefern pro Datenzeile ein `GraphResult`,
//! sodass der Aufrufer entscheidet, ob er Diagnosen sammelt oder abbricht.
//! Kopfzeilen werden erkannt und still übersprungen.

pub mod connections;
pub mod coords;
pub mod labels;
pub mod manifest;
mod reader;
pub mod writer;

pub use connections::{parse_connections, ConnectionRow};
pub use coords::{parse_coords, CoordRow};
pub use labels::{parse_labels, LabelRow};
pub use manifest::{ArtifactKind, Manifest};
pub use writer::{write_connections, write_coords, write_labels};
