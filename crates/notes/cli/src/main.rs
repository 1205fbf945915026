//! Terminal notes client entry point.
use anyhow::Result;
use notes_cli::{CliConfig, NotesApp, logging};

fn main() -> Result<()> {
    // Load .env before reading any NOTES_* variable.
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(config.session_id.as_deref())?;

    NotesApp::builder(config).build()?.run()
}
