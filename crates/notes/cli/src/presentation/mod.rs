//! Terminal presentation components used by the notes frontend.
pub mod dialog;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use dialog::TerminalPrompt;
