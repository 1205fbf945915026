//! Terminal frontend for the assignment notes widget.
//!
//! The widget logic lives in `notes-core`; this crate supplies the host
//! capabilities (filesystem export, system mail handler, modal dialogs) and
//! renders the page with ratatui.

mod app;
mod config;
mod editor;
mod event_loop;
pub mod host;
mod input;
pub mod logging;
pub mod presentation;
mod session;
mod state;

pub use app::NotesApp;
pub use config::CliConfig;
