//! Save confirmation banner.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::NotesTheme;

pub fn render(frame: &mut Frame, area: Rect, text: &str) {
    let theme = NotesTheme::new();
    let paragraph = Paragraph::new(text).style(theme.banner()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.banner()),
    );
    frame.render_widget(paragraph, area);
}
