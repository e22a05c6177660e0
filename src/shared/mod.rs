//! Geteilte Typen für layer-übergreifende Verträge.

/// Laufzeit-Optionen (TOML-persistiert)
pub mod options;

pub use options::EditorOptions;
pub use options::{HISTORY_MAX_DEPTH, RENDER_HEIGHT, RENDER_WIDTH};
