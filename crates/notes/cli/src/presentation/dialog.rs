//! Modal dialogs drawn over the last frame.
//!
//! [`TerminalPrompt`] is the terminal host's [`ConfirmationPrompt`]: each call
//! runs a nested input loop until the user answers, which makes the dialog
//! blocking from the widget's point of view.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use notes_core::{CapabilityError, ConfirmationPrompt};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::presentation::{
    terminal::{Backdrop, SharedTui},
    theme::NotesTheme,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// Single OK button.
    Notice,
    /// OK and Cancel.
    Confirm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogButton {
    Ok,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogResponse {
    Pending,
    Accepted,
    Declined,
}

#[derive(Clone, Debug)]
pub struct DialogState {
    pub kind: DialogKind,
    pub message: String,
    pub selected: DialogButton,
}

impl DialogState {
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Notice,
            message: message.into(),
            selected: DialogButton::Ok,
        }
    }

    pub fn confirm(message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Confirm,
            message: message.into(),
            selected: DialogButton::Ok,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResponse {
        match self.kind {
            DialogKind::Notice => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'o' | 'y') => {
                    DialogResponse::Accepted
                }
                _ => DialogResponse::Pending,
            },
            DialogKind::Confirm => match key.code {
                KeyCode::Char('y' | 'Y') => DialogResponse::Accepted,
                KeyCode::Char('n' | 'N') | KeyCode::Esc => DialogResponse::Declined,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    self.selected = match self.selected {
                        DialogButton::Ok => DialogButton::Cancel,
                        DialogButton::Cancel => DialogButton::Ok,
                    };
                    DialogResponse::Pending
                }
                KeyCode::Enter | KeyCode::Char(' ') => match self.selected {
                    DialogButton::Ok => DialogResponse::Accepted,
                    DialogButton::Cancel => DialogResponse::Declined,
                },
                _ => DialogResponse::Pending,
            },
        }
    }
}

/// Render a dialog centered over whatever is already in the frame.
pub fn render(frame: &mut Frame, state: &DialogState) {
    let theme = NotesTheme::new();
    let area = popup_area(frame.area(), &state.message);

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.dialog_border())
        .title(match state.kind {
            DialogKind::Notice => " Notice ",
            DialogKind::Confirm => " Confirm ",
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let message = Paragraph::new(state.message.as_str())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let buttons: &[(DialogButton, &str)] = match state.kind {
        DialogKind::Notice => &[(DialogButton::Ok, " OK ")],
        DialogKind::Confirm => &[(DialogButton::Ok, " OK "), (DialogButton::Cancel, " Cancel ")],
    };
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (button, label) in buttons {
        let style = if *button == state.selected {
            theme.dialog_border().add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            theme.muted()
        };
        spans.push(Span::styled(*label, style));
        spans.push(Span::raw("  "));
    }
    spans.pop();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[1],
    );
}

fn popup_area(area: Rect, message: &str) -> Rect {
    let width = (message.chars().count() as u16 + 6)
        .clamp(24, area.width.saturating_sub(4).max(24))
        .min(area.width);
    let height = 6.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Blocking dialogs on the shared terminal.
pub struct TerminalPrompt {
    terminal: SharedTui,
    backdrop: Backdrop,
}

impl TerminalPrompt {
    pub fn new(terminal: SharedTui, backdrop: Backdrop) -> Self {
        Self { terminal, backdrop }
    }

    fn run(&mut self, mut state: DialogState) -> Result<DialogResponse, CapabilityError> {
        let mut terminal = self
            .terminal
            .try_borrow_mut()
            .map_err(|_| CapabilityError::Prompt("terminal is busy".to_string()))?;

        tracing::debug!("Dialog opened: {:?}", state.kind);

        loop {
            terminal.draw(|frame| {
                self.backdrop.paint(frame.buffer_mut());
                render(frame, &state);
            })?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                let response = state.handle_key(key);
                if response != DialogResponse::Pending {
                    tracing::debug!("Dialog closed: {:?}", response);
                    return Ok(response);
                }
            }
        }
    }
}

impl ConfirmationPrompt for TerminalPrompt {
    fn notify(&mut self, message: &str) -> Result<(), CapabilityError> {
        self.run(DialogState::notice(message)).map(|_| ())
    }

    fn confirm(&mut self, message: &str) -> Result<bool, CapabilityError> {
        Ok(self.run(DialogState::confirm(message))? == DialogResponse::Accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn confirm_answers() {
        let mut state = DialogState::confirm("Clear?");
        assert_eq!(state.handle_key(key(KeyCode::Char('x'))), DialogResponse::Pending);
        assert_eq!(state.handle_key(key(KeyCode::Char('y'))), DialogResponse::Accepted);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), DialogResponse::Declined);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), DialogResponse::Accepted);
    }

    #[test]
    fn enter_follows_selected_button() {
        let mut state = DialogState::confirm("Clear?");
        assert_eq!(state.handle_key(key(KeyCode::Right)), DialogResponse::Pending);
        assert_eq!(state.selected, DialogButton::Cancel);
        assert_eq!(state.handle_key(key(KeyCode::Enter)), DialogResponse::Declined);
    }

    #[test]
    fn notice_cannot_be_declined() {
        let mut state = DialogState::notice("Saved");
        assert_eq!(state.handle_key(key(KeyCode::Char('n'))), DialogResponse::Pending);
        assert_eq!(state.handle_key(key(KeyCode::Esc)), DialogResponse::Accepted);
    }

    #[test]
    fn renders_message_and_buttons() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let state = DialogState::confirm("Are you sure you want to clear all notes?");
        terminal.draw(|frame| render(frame, &state)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Are you sure you want to clear all notes?"));
        assert!(text.contains("OK"));
        assert!(text.contains("Cancel"));
    }

    #[test]
    fn popup_fits_small_terminals() {
        let area = Rect::new(0, 0, 20, 4);
        let popup = popup_area(area, "a very long message that cannot fit");
        assert!(popup.width <= area.width);
        assert!(popup.height <= area.height);
    }
}
