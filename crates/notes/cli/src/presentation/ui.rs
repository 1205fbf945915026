//! Main render entry point composing all widgets into the notes page.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{config::UiConfig, presentation::widgets, state::AppState};
use notes_core::NotesWidget;

/// Everything the widgets read to draw one frame.
pub struct RenderContext<'a> {
    pub widget: &'a NotesWidget,
    pub app_state: &'a AppState,
    pub ui: &'a UiConfig,
}

/// Draw the full page:
///
/// ```text
/// ┌ header ───────────────────────────────┐
/// │ instructions      │ notes editor       │
/// │                   │ [buttons]          │
/// │                   │ banner             │
/// status / key help / footer
/// ```
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(1), // Status
            Constraint::Length(1), // Key help
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, rows[0]);

    let width = ctx.ui.instructions_width;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(width),
            Constraint::Percentage(100 - width),
        ])
        .split(rows[1]);

    widgets::instructions::render(frame, columns[0], ctx.widget, ctx.app_state);
    render_notes_column(frame, columns[1], ctx);

    widgets::status::render(frame, rows[2], ctx.app_state);
    widgets::footer::render_help(frame, rows[3], ctx.app_state);
    widgets::footer::render(frame, rows[4]);
}

fn render_notes_column(frame: &mut Frame, area: ratatui::layout::Rect, ctx: &RenderContext) {
    let banner = ctx.widget.banner();
    let banner_height = if banner.is_some() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),                // Editor
            Constraint::Length(4),             // Buttons
            Constraint::Length(banner_height), // Save banner
        ])
        .split(area);

    widgets::notes::render(frame, chunks[0], ctx.widget, ctx.app_state);
    widgets::actions::render(frame, chunks[1], ctx.widget, ctx.app_state);
    if let Some(banner) = banner {
        widgets::banner::render(frame, chunks[2], &banner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{NoteAction, TimestampFormat, mock::MockHost};
    use ratatui::{Terminal, backend::TestBackend, style::Color};

    fn draw(widget: &NotesWidget, state: &AppState) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let ui = UiConfig::default();
        terminal
            .draw(|frame| {
                render(
                    frame,
                    &RenderContext {
                        widget,
                        app_state: state,
                        ui: &ui,
                    },
                )
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text_of(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    fn find_cell(buffer: &ratatui::buffer::Buffer, needle: &str) -> Option<usize> {
        let cells = buffer.content();
        let wanted: Vec<String> = needle.chars().map(String::from).collect();
        (0..cells.len()).find(|&start| {
            wanted
                .iter()
                .enumerate()
                .all(|(k, ch)| cells.get(start + k).is_some_and(|c| c.symbol() == ch))
        })
    }

    fn widget(host: &MockHost) -> NotesWidget {
        NotesWidget::new(host.capabilities(), TimestampFormat::default())
    }

    #[test]
    fn empty_page_shows_brief_placeholder_and_buttons() {
        let host = MockHost::new();
        let text = text_of(&draw(&widget(&host), &AppState::new()));

        assert!(text.contains("Assignment Notes App"));
        assert!(text.contains("Assignment Instructions"));
        assert!(text.contains("ALL 124 - Assignment 3"));
        assert!(text.contains("Your Notes"));
        assert!(text.contains("Start taking notes about the assignment here..."));
        for action in NoteAction::ALL {
            assert!(text.contains(action.label()), "missing {action}");
        }
        assert!(!text.contains("Notes saved!"));
    }

    #[test]
    fn banner_appears_after_save() {
        let host = MockHost::new();
        let mut widget = widget(&host);
        widget.update_draft("Team: Alice, Bob");
        widget.save();

        let text = text_of(&draw(&widget, &AppState::new()));
        assert!(text.contains("Team: Alice, Bob"));
        assert!(text.contains("✓ Notes saved! Last saved:"));
        assert!(!text.contains("Start taking notes"));
    }

    #[test]
    fn disabled_buttons_are_dimmed() {
        let host = MockHost::new();
        let buffer = draw(&widget(&host), &AppState::new());

        let index = find_cell(&buffer, NoteAction::Download.label()).unwrap();
        let cell = &buffer.content()[index];
        assert_eq!(cell.fg, Color::DarkGray);
    }
}
