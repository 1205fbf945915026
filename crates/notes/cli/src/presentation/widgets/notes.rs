//! The editable notes area.

use notes_core::{NotesWidget, brief::NOTES_PLACEHOLDER};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    presentation::theme::NotesTheme,
    state::{AppState, Focus},
};

/// Render the draft, or the placeholder while it is empty.
///
/// Lines are not wrapped, so the cursor sits at the display width of the text
/// before it on its line; the view scrolls in both directions to keep the cursor visible.
pub fn render(frame: &mut Frame, area: Rect, widget: &NotesWidget, app_state: &AppState) {
    let theme = NotesTheme::new();
    let focused = app_state.focus == Focus::Notes;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(focused))
        .title(Span::styled(" Your Notes ", theme.notes_title()));
    let inner = block.inner(area);

    let draft = widget.draft();
    let row = saturate(app_state.editor.position(draft).0);
    let col = saturate(cursor_cells(draft, app_state));
    let scroll = (
        row.saturating_sub(inner.height.saturating_sub(1)),
        col.saturating_sub(inner.width.saturating_sub(1)),
    );

    let paragraph = if draft.is_empty() {
        Paragraph::new(NOTES_PLACEHOLDER).style(theme.muted())
    } else {
        Paragraph::new(draft).scroll(scroll)
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(
            inner.x + col - scroll.1,
            inner.y + row - scroll.0,
        ));
    }
}

/// Display width of the cursor's line up to the cursor, in terminal cells.
fn cursor_cells(draft: &str, app_state: &AppState) -> usize {
    let before = draft.get(..app_state.editor.cursor()).unwrap_or(draft);
    let line = before.rsplit('\n').next().unwrap_or(before);
    Span::raw(line).width()
}

fn saturate(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
