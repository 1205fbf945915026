//! Colors and styles for the notes UI.

use notes_core::NoteAction;
use ratatui::style::{Color, Modifier, Style};

use crate::state::StatusLevel;

/// Ratatui styling shared by all widgets.
///
/// Button colors follow their role: primary save, outlined download,
/// accent email, destructive clear.
#[derive(Clone, Copy, Debug, Default)]
pub struct NotesTheme;

impl NotesTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn instructions_title(&self) -> Style {
        self.title()
    }

    pub fn notes_title(&self) -> Style {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD)
    }

    fn action_color(&self, action: NoteAction) -> Color {
        match action {
            NoteAction::Save => Color::Cyan,
            NoteAction::Download => Color::Blue,
            NoteAction::Email => Color::Magenta,
            NoteAction::Clear => Color::Red,
        }
    }

    pub fn button(&self, action: NoteAction, enabled: bool, highlighted: bool) -> Style {
        if !enabled {
            return self.muted().add_modifier(Modifier::DIM);
        }

        let style = Style::default().fg(self.action_color(action));
        if highlighted {
            style.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn banner(&self) -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn status(&self, level: StatusLevel) -> Style {
        match level {
            StatusLevel::Info => Style::default().fg(Color::White),
            StatusLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }

    pub fn dialog_border(&self) -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}
