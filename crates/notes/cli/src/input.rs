//! Input processing for the terminal frontend.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use notes_core::NoteAction;

use crate::editor::Edit;
use crate::state::Focus;

const PAGE_LINES: i32 = 10;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Run a widget action directly (shortcut).
    Perform(NoteAction),
    /// Edit the draft.
    Edit(Edit),
    FocusNext,
    FocusPrev,
    /// Scroll the instructions by the given number of lines.
    Scroll(i32),
    /// Move the button highlight backwards (negative) or forwards.
    MoveSelection(isize),
    /// Press the highlighted button.
    ActivateSelected,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands for the focused panel.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, focus: Focus) -> KeyAction {
        // AltGr arrives as Ctrl+Alt on Windows and composes ordinary text.
        if key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
            && let KeyCode::Char(ch) = key.code
        {
            return match focus {
                Focus::Notes => KeyAction::Edit(Edit::Insert(ch)),
                _ => KeyAction::None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Self::shortcut(key.code);
        }

        match key.code {
            KeyCode::Tab => return KeyAction::FocusNext,
            KeyCode::BackTab => return KeyAction::FocusPrev,
            _ => {}
        }

        match focus {
            Focus::Instructions => Self::instructions(key.code),
            Focus::Notes => Self::notes(key),
            Focus::Actions => Self::actions(key.code),
        }
    }

    fn shortcut(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char('q' | 'c') => KeyAction::Quit,
            KeyCode::Char('s') => KeyAction::Perform(NoteAction::Save),
            KeyCode::Char('d') => KeyAction::Perform(NoteAction::Download),
            KeyCode::Char('e') => KeyAction::Perform(NoteAction::Email),
            KeyCode::Char('l') => KeyAction::Perform(NoteAction::Clear),
            _ => KeyAction::None,
        }
    }

    fn instructions(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up | KeyCode::Char('k') => KeyAction::Scroll(-1),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::Scroll(1),
            KeyCode::PageUp => KeyAction::Scroll(-PAGE_LINES),
            KeyCode::PageDown | KeyCode::Char(' ') => KeyAction::Scroll(PAGE_LINES),
            KeyCode::Home => KeyAction::Scroll(i32::MIN),
            KeyCode::End => KeyAction::Scroll(i32::MAX),
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn notes(key: KeyEvent) -> KeyAction {
        let edit = match key.code {
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::ALT) => return KeyAction::None,
            KeyCode::Char(ch) => Edit::Insert(ch),
            KeyCode::Enter => Edit::Newline,
            KeyCode::Backspace => Edit::Backspace,
            KeyCode::Delete => Edit::Delete,
            KeyCode::Left => Edit::Left,
            KeyCode::Right => Edit::Right,
            KeyCode::Up => Edit::Up,
            KeyCode::Down => Edit::Down,
            KeyCode::Home => Edit::Home,
            KeyCode::End => Edit::End,
            KeyCode::Esc => return KeyAction::FocusNext,
            _ => return KeyAction::None,
        };
        KeyAction::Edit(edit)
    }

    fn actions(code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveSelection(-1),
            KeyCode::Right | KeyCode::Char('l') => KeyAction::MoveSelection(1),
            // Buttons sit in a two-column grid.
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveSelection(-2),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveSelection(2),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::ActivateSelected,
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(ch))
        }
    }

    #[test]
    fn shortcuts_work_from_any_panel() {
        let handler = InputHandler::new();
        for focus in [Focus::Instructions, Focus::Notes, Focus::Actions] {
            assert_eq!(
                handler.handle_key(ctrl('s'), focus),
                KeyAction::Perform(NoteAction::Save)
            );
            assert_eq!(
                handler.handle_key(ctrl('d'), focus),
                KeyAction::Perform(NoteAction::Download)
            );
            assert_eq!(
                handler.handle_key(ctrl('e'), focus),
                KeyAction::Perform(NoteAction::Email)
            );
            assert_eq!(
                handler.handle_key(ctrl('l'), focus),
                KeyAction::Perform(NoteAction::Clear)
            );
            assert_eq!(handler.handle_key(ctrl('q'), focus), KeyAction::Quit);
        }
    }

    #[test]
    fn notes_panel_treats_letters_as_text() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Focus::Notes),
            KeyAction::Edit(Edit::Insert('q'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Focus::Notes),
            KeyAction::Edit(Edit::Newline)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), Focus::Notes),
            KeyAction::FocusNext
        );
    }

    #[test]
    fn altgr_characters_are_typed_not_shortcuts() {
        let handler = InputHandler::new();
        for ch in ['@', '{', '}', '[', ']', '\\', '|', '€', '~', 'l', 's'] {
            let altgr = KeyEvent {
                modifiers: KeyModifiers::CONTROL | KeyModifiers::ALT,
                ..key(KeyCode::Char(ch))
            };
            assert_eq!(
                handler.handle_key(altgr, Focus::Notes),
                KeyAction::Edit(Edit::Insert(ch))
            );
            assert_eq!(handler.handle_key(altgr, Focus::Actions), KeyAction::None);
        }
    }

    #[test]
    fn button_row_navigation() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Right), Focus::Actions),
            KeyAction::MoveSelection(1)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Focus::Actions),
            KeyAction::MoveSelection(2)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Enter), Focus::Actions),
            KeyAction::ActivateSelected
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), Focus::Actions),
            KeyAction::Quit
        );
    }

    #[test]
    fn instructions_scroll_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), Focus::Instructions),
            KeyAction::Scroll(1)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::PageUp), Focus::Instructions),
            KeyAction::Scroll(-PAGE_LINES)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::BackTab), Focus::Instructions),
            KeyAction::FocusPrev
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::F(5)), Focus::Actions),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(ctrl('x'), Focus::Notes), KeyAction::None);
    }
}
