//! AppCommand- und EditEvent-Enums für den Command/Undo-Datenfluss.

mod command;
mod edit;

pub use command::AppCommand;
pub use edit::EditEvent;
