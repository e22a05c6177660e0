//! Node Manager Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod csv_io;
pub mod shared;

pub use app::{AppCommand, AppController, AppState, EditEvent, EditEventLog, ImportReport};
pub use core::{
    CoordinateScale, GraphError, GraphResult, Node, NodeId, NodeRegistry, LOWER_RIGHT_CORNER,
    UPPER_LEFT_CORNER,
};
pub use csv_io::{ArtifactKind, Manifest};
pub use shared::EditorOptions;
