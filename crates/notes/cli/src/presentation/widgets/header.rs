//! Header widget with the page title and subtitle.

use notes_core::brief::{APP_SUBTITLE, APP_TITLE};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::NotesTheme;

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = NotesTheme::new();

    let text = vec![
        Line::from(Span::styled(APP_TITLE, theme.title())),
        Line::from(Span::styled(APP_SUBTITLE, theme.muted())),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
