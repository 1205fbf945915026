//! Terminal setup/teardown helpers for the notes UI.
use std::cell::RefCell;
use std::io::{self, Stdout};
use std::rc::Rc;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, buffer::Buffer};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Terminal handle shared by the event loop and modal dialogs.
///
/// Only one of them draws at a time: dialogs run while a key handler is on
/// the stack and the loop is not borrowing the terminal.
pub type SharedTui = Rc<RefCell<Tui>>;

pub fn init() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Copy of the last full frame, painted underneath modal dialogs.
#[derive(Clone, Default)]
pub struct Backdrop {
    buffer: Rc<RefCell<Buffer>>,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture(&self, frame: &Buffer) {
        self.buffer.borrow_mut().clone_from(frame);
    }

    /// Paint the captured frame into `target` if the sizes still match.
    pub fn paint(&self, target: &mut Buffer) {
        let backdrop = self.buffer.borrow();
        if backdrop.area == target.area {
            target.clone_from(&backdrop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn backdrop_paints_matching_area_only() {
        let backdrop = Backdrop::new();
        let mut frame = Buffer::empty(Rect::new(0, 0, 4, 1));
        frame.set_string(0, 0, "note", ratatui::style::Style::default());
        backdrop.capture(&frame);

        let mut same = Buffer::empty(Rect::new(0, 0, 4, 1));
        backdrop.paint(&mut same);
        assert_eq!(same, frame);

        let mut resized = Buffer::empty(Rect::new(0, 0, 6, 1));
        backdrop.paint(&mut resized);
        assert_eq!(resized, Buffer::empty(Rect::new(0, 0, 6, 1)));
    }
}
