//! Synchronous event loop: read terminal input, update the session, redraw.
//!
//! Key handling may open a modal dialog through the widget's prompt. The
//! dialog borrows the shared terminal itself, so the loop only holds the
//! terminal while drawing.

use std::time::Duration;

use anyhow::{Result, anyhow};
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};

use crate::{
    config::UiConfig,
    editor::Edit,
    input::InputHandler,
    presentation::{
        terminal::{Backdrop, SharedTui},
        ui,
    },
    session::{Flow, NotesSession},
    state::Focus,
};

const POLL_INTERVAL_MS: u64 = 250;

pub struct EventLoop {
    terminal: SharedTui,
    backdrop: Backdrop,
    input: InputHandler,
    session: NotesSession,
    ui: UiConfig,
}

impl EventLoop {
    pub fn new(
        terminal: SharedTui,
        backdrop: Backdrop,
        session: NotesSession,
        ui: UiConfig,
    ) -> Self {
        Self {
            terminal,
            backdrop,
            input: InputHandler::new(),
            session,
            ui,
        }
    }

    /// Run until the user quits, returning the final session.
    pub fn run(mut self) -> Result<NotesSession> {
        self.render()?;

        loop {
            if !term_event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                continue;
            }

            let flow = match term_event::read()? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = self.input.handle_key(key, self.session.state.focus);
                    self.session.handle(action)
                }
                TermEvent::Paste(text) => {
                    if self.session.state.focus == Focus::Notes {
                        self.session.edit(Edit::paste(&text));
                    }
                    Flow::Continue
                }
                TermEvent::Resize(_, _) => Flow::Continue,
                _ => continue,
            };

            if flow == Flow::Quit {
                break;
            }
            self.render()?;
        }

        Ok(self.session)
    }

    /// Draw the page and keep a copy of it as the dialog backdrop.
    fn render(&mut self) -> Result<()> {
        let mut terminal = self
            .terminal
            .try_borrow_mut()
            .map_err(|_| anyhow!("terminal is borrowed by a dialog"))?;

        let ctx = ui::RenderContext {
            widget: &self.session.widget,
            app_state: &self.session.state,
            ui: &self.ui,
        };
        let backdrop = &self.backdrop;

        terminal.draw(|frame| {
            ui::render(frame, &ctx);
            backdrop.capture(frame.buffer_mut());
        })?;

        Ok(())
    }
}
