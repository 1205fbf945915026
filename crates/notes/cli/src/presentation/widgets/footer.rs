//! Key help line and the closing reminders.

use notes_core::brief::FOOTER_LINES;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    presentation::theme::NotesTheme,
    state::{AppState, Focus},
};

const SHORTCUTS: &str = "^S save  ^D download  ^E email  ^L clear  ^Q quit";

/// Key bindings for the focused panel, followed by the global shortcuts.
pub fn render_help(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let theme = NotesTheme::new();

    let local = match app_state.focus {
        Focus::Instructions => "↑/↓ scroll  PgUp/PgDn page  Tab next",
        Focus::Notes => "type to edit  Esc/Tab next",
        Focus::Actions => "arrows select  Enter press  Tab next",
    };

    let line = Line::from(vec![
        Span::styled(format!(" {local}"), theme.title()),
        Span::styled("  |  ", theme.muted()),
        Span::styled(SHORTCUTS, theme.muted()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = NotesTheme::new();
    let lines: Vec<Line> = FOOTER_LINES
        .iter()
        .map(|line| Line::from(Span::styled(*line, theme.muted())))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
