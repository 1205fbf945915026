//! Read-only assignment brief with its own scroll offset.

use notes_core::NotesWidget;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    presentation::theme::NotesTheme,
    state::{AppState, Focus},
};

/// Render the brief. The first line is its heading and gets emphasis.
pub fn render(frame: &mut Frame, area: Rect, widget: &NotesWidget, app_state: &AppState) {
    let theme = NotesTheme::new();
    let focused = app_state.focus == Focus::Instructions;

    let mut lines = widget.instructions().lines();
    let mut text = Text::default();
    if let Some(heading) = lines.next() {
        text.push_line(Line::from(Span::styled(
            heading,
            theme.title().add_modifier(Modifier::UNDERLINED),
        )));
    }
    for line in lines {
        text.push_line(Line::raw(line));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused))
        .title(Span::styled(
            " Assignment Instructions ",
            theme.instructions_title(),
        ));

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app_state.instructions_scroll, 0));

    frame.render_widget(paragraph, area);
}
