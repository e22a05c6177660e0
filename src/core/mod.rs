//! Core-Domänentypen: Nodes, NodeRegistry, Koordinaten-Skalierung, Fehler.

pub mod error;
/// Core-Datenmodelle für Wegpunkt-Graphen
///
/// - NodeRegistry: Container für alle Nodes in Einfügereihenfolge
/// - Node: Einzelner Wegpunkt mit Position, Nachbarn und Labels
pub mod node;
pub mod registry;
pub mod scale;

pub use error::{GraphError, GraphResult};
pub use node::{Node, NodeId};
pub use registry::{is_reserved, NodeRegistry, LOWER_RIGHT_CORNER, UPPER_LEFT_CORNER};
pub use scale::CoordinateScale;
