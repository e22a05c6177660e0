//! Application-Layer: Controller, State, Events, History und Use-Cases.

pub mod controller;
pub mod events;
pub mod history;
/// Application State
///
/// Dieses Modul hält Registry, History, Skalierung und Optionen zusammen.
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, EditEvent};
pub use history::EditEventLog;
pub use state::AppState;
pub use use_cases::file_io::{ArtifactSource, ImportReport};
