//! UI state that lives beside the widget: focus, selection, scroll, status.

use notes_core::NoteAction;

use crate::editor::DraftEditor;

/// Panel that receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Instructions,
    Notes,
    Actions,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Instructions => Focus::Notes,
            Focus::Notes => Focus::Actions,
            Focus::Actions => Focus::Instructions,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Instructions => Focus::Actions,
            Focus::Notes => Focus::Instructions,
            Focus::Actions => Focus::Notes,
        }
    }
}

/// Severity of the status line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub level: StatusLevel,
}

/// Mutable terminal-side state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub focus: Focus,
    /// Index into [`NoteAction::ALL`] of the highlighted button.
    pub selected: usize,
    /// First visible line of the instructions panel.
    pub instructions_scroll: u16,
    pub editor: DraftEditor,
    pub status: Option<StatusLine>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            focus: Focus::Notes,
            selected: 0,
            instructions_scroll: 0,
            editor: DraftEditor::new(),
            status: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_action(&self) -> NoteAction {
        NoteAction::ALL[self.selected.min(NoteAction::ALL.len() - 1)]
    }

    /// Moves the button highlight, stopping at the first and last button.
    pub fn move_selection(&mut self, delta: isize) {
        let last = NoteAction::ALL.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Scrolls the instructions, clamped to `max` lines.
    pub fn scroll_instructions(&mut self, delta: i32, max: u16) {
        let next = i32::from(self.instructions_scroll).saturating_add(delta);
        self.instructions_scroll = next.clamp(0, i32::from(max)) as u16;
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            level,
        });
    }
}
