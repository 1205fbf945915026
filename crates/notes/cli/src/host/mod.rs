//! Terminal-host implementations of the widget's capabilities.
//!
//! The confirmation prompt lives with the rest of the drawing code in
//! `presentation::dialog`.
mod exporter;
mod mailer;

pub use exporter::FsExporter;
pub use mailer::SystemMailComposer;
