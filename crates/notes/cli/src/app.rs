//! Glue code tying the host capabilities, the widget, and the terminal UI together.
use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use notes_core::{HostCapabilities, NotesWidget};

use crate::{
    config::CliConfig,
    event_loop::EventLoop,
    host::{FsExporter, SystemMailComposer},
    presentation::{
        TerminalPrompt,
        terminal::{self, Backdrop, SharedTui},
    },
    session::NotesSession,
};

pub struct NotesApp {
    config: CliConfig,
}

pub struct NotesAppBuilder {
    config: CliConfig,
}

impl NotesAppBuilder {
    pub fn new(config: CliConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<NotesApp> {
        tracing::info!(
            "Export directory: {}",
            self.config.export.directory.display()
        );
        match &self.config.mail.command {
            Some(command) => tracing::info!("Mail command: {}", command),
            None => tracing::info!("Mail command: system default"),
        }

        Ok(NotesApp {
            config: self.config,
        })
    }
}

impl NotesApp {
    pub fn builder(config: CliConfig) -> NotesAppBuilder {
        NotesAppBuilder::new(config)
    }

    pub fn run(self) -> Result<()> {
        tracing::info!("Notes client starting...");

        let terminal: SharedTui = Rc::new(RefCell::new(terminal::init()?));
        let _guard = terminal::TerminalGuard;

        let CliConfig {
            ui,
            export,
            mail,
            timestamp,
            ..
        } = self.config;

        let backdrop = Backdrop::new();
        let host = HostCapabilities::new(
            FsExporter::new(export.directory),
            SystemMailComposer::new(mail.command),
            TerminalPrompt::new(Rc::clone(&terminal), backdrop.clone()),
        );
        let session = NotesSession::new(NotesWidget::new(host, timestamp));

        let session = EventLoop::new(terminal, backdrop, session, ui).run()?;

        terminal::restore()?;
        tracing::info!(
            "Notes client exiting (draft {} bytes, saved {} bytes)",
            session.widget.draft().len(),
            session.widget.saved_text().len()
        );

        Ok(())
    }
}
