//! The four action buttons, laid out as a two-by-two grid.

use notes_core::{NoteAction, NotesWidget};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::theme::NotesTheme,
    state::{AppState, Focus},
};

pub fn render(frame: &mut Frame, area: Rect, widget: &NotesWidget, app_state: &AppState) {
    let theme = NotesTheme::new();
    let focused = app_state.focus == Focus::Actions;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused))
        .title(" Actions ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    for (index, action) in NoteAction::ALL.into_iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(rows[index / 2]);

        let highlighted = focused && app_state.selected_action() == action;
        let style = theme.button(action, widget.is_enabled(action), highlighted);
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", action.label()),
            style,
        )))
        .alignment(Alignment::Center);

        frame.render_widget(button, columns[index % 2]);
    }
}
