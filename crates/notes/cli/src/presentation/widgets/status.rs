//! One-line status message for the last action.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{presentation::theme::NotesTheme, state::AppState};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let Some(status) = &app_state.status else {
        return;
    };

    let theme = NotesTheme::new();
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        theme.status(status.level),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
