//! Applies decoded key commands to the widget and the UI state.
//!
//! Nothing here touches the terminal directly; dialogs are reached through
//! the widget's injected prompt, so the session can be driven by tests.

use notes_core::{ActionOutcome, NoteAction, NotesWidget, brief::EXPORT_FILE_NAME};

use crate::{
    editor::Edit,
    input::KeyAction,
    state::{AppState, Focus, StatusLevel},
};

/// Whether the event loop should keep running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct NotesSession {
    pub widget: NotesWidget,
    pub state: AppState,
}

impl NotesSession {
    pub fn new(widget: NotesWidget) -> Self {
        Self {
            widget,
            state: AppState::new(),
        }
    }

    /// Highest useful scroll offset for the instructions panel.
    pub fn max_instructions_scroll(&self) -> u16 {
        let lines = self.widget.instructions().lines().count();
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn handle(&mut self, action: KeyAction) -> Flow {
        match action {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                return Flow::Quit;
            }
            KeyAction::Perform(note_action) => self.perform(note_action),
            KeyAction::ActivateSelected => self.perform(self.state.selected_action()),
            KeyAction::Edit(edit) => self.edit(edit),
            KeyAction::FocusNext => self.state.focus = self.state.focus.next(),
            KeyAction::FocusPrev => self.state.focus = self.state.focus.prev(),
            KeyAction::Scroll(delta) => {
                let max = self.max_instructions_scroll();
                self.state.scroll_instructions(delta, max);
            }
            KeyAction::MoveSelection(delta) => self.state.move_selection(delta),
            KeyAction::None => {}
        }

        Flow::Continue
    }

    /// Apply an edit at the cursor and push the result into the widget.
    pub fn edit(&mut self, edit: Edit) {
        if let Some(next) = self.state.editor.apply(edit, self.widget.draft()) {
            self.widget.update_draft(next);
        }
    }

    pub fn perform(&mut self, action: NoteAction) {
        let outcome = self.widget.perform(action);
        tracing::debug!("{} -> {:?}", action, outcome);

        match outcome {
            ActionOutcome::Saved => {}
            ActionOutcome::Exported(path) => self.state.set_status(
                StatusLevel::Info,
                format!("Saved {} to {}", EXPORT_FILE_NAME, path.display()),
            ),
            ActionOutcome::Composed => self
                .state
                .set_status(StatusLevel::Info, "Opened your mail client with the notes"),
            ActionOutcome::Cleared => {
                self.state.editor.clamp(self.widget.draft());
                self.state.focus = Focus::Notes;
                self.state.set_status(StatusLevel::Info, "Notes cleared");
            }
            ActionOutcome::Cancelled | ActionOutcome::Disabled => {}
            ActionOutcome::Failed(reason) => self
                .state
                .set_status(StatusLevel::Warning, format!("{} failed: {}", action, reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::{TimestampFormat, mock::MockHost};

    fn session(host: &MockHost) -> NotesSession {
        NotesSession::new(NotesWidget::new(
            host.capabilities(),
            TimestampFormat::default(),
        ))
    }

    fn type_text(session: &mut NotesSession, text: &str) {
        for ch in text.chars() {
            let edit = if ch == '\n' { Edit::Newline } else { Edit::Insert(ch) };
            session.handle(KeyAction::Edit(edit));
        }
    }

    #[test]
    fn typed_text_reaches_widget_verbatim() {
        let host = MockHost::new();
        let mut session = session(&host);
        type_text(&mut session, "  Team: Alice, Bob  \n");
        assert_eq!(session.widget.draft(), "  Team: Alice, Bob  \n");
    }

    #[test]
    fn scenario_save_download_clear() {
        let host = MockHost::new();
        let mut session = session(&host);
        type_text(&mut session, "Team: Alice, Bob");

        session.handle(KeyAction::Perform(NoteAction::Save));
        assert_eq!(session.widget.saved_text(), "Team: Alice, Bob");
        assert!(session.widget.banner().is_some());

        session.handle(KeyAction::Perform(NoteAction::Download));
        assert_eq!(host.exports()[0].contents, "Team: Alice, Bob");
        assert_eq!(
            session.state.status.as_ref().map(|s| s.level),
            Some(StatusLevel::Info)
        );

        host.answer_next(true);
        session.handle(KeyAction::Perform(NoteAction::Clear));
        assert_eq!(session.widget.draft(), "");
        assert_eq!(session.state.editor.cursor(), 0);
        for action in [NoteAction::Download, NoteAction::Email, NoteAction::Clear] {
            assert!(!session.widget.is_enabled(action));
        }

        type_text(&mut session, "again");
        assert_eq!(session.widget.draft(), "again");
    }

    #[test]
    fn activating_disabled_button_is_inert() {
        let host = MockHost::new();
        let mut session = session(&host);
        session.handle(KeyAction::FocusNext);
        session.handle(KeyAction::MoveSelection(1));
        assert_eq!(session.state.selected_action(), NoteAction::Download);

        assert_eq!(session.handle(KeyAction::ActivateSelected), Flow::Continue);
        assert!(host.exports().is_empty());
        assert!(session.state.status.is_none());
    }

    #[test]
    fn failure_sets_warning_status() {
        let host = MockHost::new();
        host.fail_mail();
        let mut session = session(&host);
        type_text(&mut session, "A & B");

        session.handle(KeyAction::Perform(NoteAction::Email));
        let status = session.state.status.clone().unwrap();
        assert_eq!(status.level, StatusLevel::Warning);
        assert!(status.text.starts_with("Email Notes failed"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let host = MockHost::new();
        let mut session = session(&host);
        assert_eq!(session.handle(KeyAction::Quit), Flow::Quit);
    }

    #[test]
    fn scroll_is_bounded_by_brief_length() {
        let host = MockHost::new();
        let mut session = session(&host);
        session.handle(KeyAction::Scroll(i32::MAX));
        assert_eq!(
            session.state.instructions_scroll,
            session.max_instructions_scroll()
        );
        session.handle(KeyAction::Scroll(i32::MIN));
        assert_eq!(session.state.instructions_scroll, 0);
    }
}
