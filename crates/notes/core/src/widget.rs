//! The notes widget: transient note state plus the four user actions.
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::{
    brief::{ASSIGNMENT_BRIEF, CLEAR_CONFIRMATION, EXPORT_FILE_NAME, SAVE_ACKNOWLEDGMENT},
    capability::HostCapabilities,
    mailto::ComposeRequest,
    timestamp::TimestampFormat,
};

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// User actions exposed as buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteAction {
    Save,
    Download,
    Email,
    Clear,
}

impl NoteAction {
    /// Actions in button-row order.
    pub const ALL: [NoteAction; 4] = [
        NoteAction::Save,
        NoteAction::Download,
        NoteAction::Email,
        NoteAction::Clear,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NoteAction::Save => "Save Notes",
            NoteAction::Download => "Download as .txt",
            NoteAction::Email => "Email Notes",
            NoteAction::Clear => "Clear Notes",
        }
    }

    /// Whether the action is inert while the draft is blank.
    pub fn requires_content(self) -> bool {
        !matches!(self, NoteAction::Save)
    }
}

impl fmt::Display for NoteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an action ended up doing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Draft copied into the saved slot.
    Saved,
    /// Draft written by the exporter to the given location.
    Exported(PathBuf),
    /// Compose request accepted by the mail handler.
    Composed,
    /// Draft reset after confirmation.
    Cleared,
    /// User declined the confirmation.
    Cancelled,
    /// Action is disabled for the current draft; nothing happened.
    Disabled,
    /// Host capability failed; note state is unchanged.
    Failed(String),
}

/// Single-owner view model for the notes page.
///
/// Holds the draft being edited and the snapshot captured by the last save.
/// Both vanish with the widget.
pub struct NotesWidget {
    draft: String,
    saved: String,
    saved_at: Option<DateTime<Local>>,
    host: HostCapabilities,
    timestamp: TimestampFormat,
    clock: Box<dyn FnMut() -> DateTime<Local>>,
}

impl NotesWidget {
    pub fn new(host: HostCapabilities, timestamp: TimestampFormat) -> Self {
        Self {
            draft: String::new(),
            saved: String::new(),
            saved_at: None,
            host,
            timestamp,
            clock: Box::new(Local::now),
        }
    }

    /// Replace the wall clock used to stamp saves.
    pub fn with_clock(mut self, clock: impl FnMut() -> DateTime<Local> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn instructions(&self) -> &'static str {
        ASSIGNMENT_BRIEF
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn saved_text(&self) -> &str {
        &self.saved
    }

    pub fn saved_at(&self) -> Option<DateTime<Local>> {
        self.saved_at
    }

    /// True when the draft has any character other than whitespace or a
    /// byte-order mark.
    pub fn has_content(&self) -> bool {
        self.draft
            .chars()
            .any(|ch| !ch.is_whitespace() && ch != BYTE_ORDER_MARK)
    }

    pub fn is_enabled(&self, action: NoteAction) -> bool {
        !action.requires_content() || self.has_content()
    }

    /// Confirmation banner, present once non-empty text has been saved.
    pub fn banner(&self) -> Option<String> {
        if self.saved.is_empty() {
            return None;
        }

        let at = self.saved_at?;
        Some(format!(
            "✓ Notes saved! Last saved: {}",
            self.timestamp.format(&at)
        ))
    }

    /// Replace the draft verbatim.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Dispatch an action by kind.
    pub fn perform(&mut self, action: NoteAction) -> ActionOutcome {
        match action {
            NoteAction::Save => self.save(),
            NoteAction::Download => self.download(),
            NoteAction::Email => self.email_notes(),
            NoteAction::Clear => self.clear_draft(),
        }
    }

    /// Snapshot the draft, stamp the time, and acknowledge.
    ///
    /// Always succeeds; a failing acknowledgment dialog is only logged.
    pub fn save(&mut self) -> ActionOutcome {
        self.saved = self.draft.clone();
        self.saved_at = Some((self.clock)());

        tracing::info!("Notes saved ({} chars)", self.saved.chars().count());

        if let Err(e) = self.host.prompt.notify(SAVE_ACKNOWLEDGMENT) {
            tracing::warn!("Save acknowledgment not shown: {}", e);
        }

        ActionOutcome::Saved
    }

    /// Export the draft as `assignment_notes.txt`.
    pub fn download(&mut self) -> ActionOutcome {
        if !self.is_enabled(NoteAction::Download) {
            return ActionOutcome::Disabled;
        }

        match self.host.exporter.export(EXPORT_FILE_NAME, &self.draft) {
            Ok(location) => {
                tracing::info!("Notes exported to {}", location.display());
                ActionOutcome::Exported(location)
            }
            Err(e) => {
                tracing::warn!("Notes export failed: {}", e);
                ActionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Hand the draft to the mail client as a new message.
    pub fn email_notes(&mut self) -> ActionOutcome {
        if !self.is_enabled(NoteAction::Email) {
            return ActionOutcome::Disabled;
        }

        let request = ComposeRequest::for_notes(self.draft.as_str());
        match self.host.mailer.compose(&request) {
            Ok(()) => {
                tracing::info!("Compose request handed to mail handler");
                ActionOutcome::Composed
            }
            Err(e) => {
                tracing::warn!("Mail handoff failed: {}", e);
                ActionOutcome::Failed(e.to_string())
            }
        }
    }

    /// Clear the draft after the user confirms.
    ///
    /// A prompt that cannot be shown counts as a declined confirmation.
    pub fn clear_draft(&mut self) -> ActionOutcome {
        if !self.is_enabled(NoteAction::Clear) {
            return ActionOutcome::Disabled;
        }

        let confirmed = match self.host.prompt.confirm(CLEAR_CONFIRMATION) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Clear confirmation not shown: {}", e);
                false
            }
        };

        if !confirmed {
            tracing::debug!("Clear cancelled");
            return ActionOutcome::Cancelled;
        }

        self.draft.clear();
        tracing::info!("Draft cleared");
        ActionOutcome::Cleared
    }
}
