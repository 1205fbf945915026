//! Host capabilities the widget depends on but does not implement.
//!
//! The widget never touches the filesystem, a mail client or the screen
//! directly. A host supplies one implementation of each trait:
//! - [`FileExporter`]: client-side file save of the draft
//! - [`MailComposer`]: handoff of a `mailto:` request to the mail client
//! - [`ConfirmationPrompt`]: blocking notices and yes/no questions

use std::path::PathBuf;

use crate::mailto::ComposeRequest;

/// Failures reported by host capabilities.
///
/// None of these are fatal: the widget logs them and reports the action as
/// failed, leaving note state untouched.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export directory unavailable: {0}")]
    ExportDirectory(String),

    #[error("No mail handler available: {0}")]
    NoMailHandler(String),

    #[error("Mail handler failed: {0}")]
    MailHandler(String),

    #[error("Prompt unavailable: {0}")]
    Prompt(String),
}

/// Saves a plain-text artifact on the host.
pub trait FileExporter {
    /// Write `contents` verbatim under `file_name`, returning where it landed.
    ///
    /// Implementations must release any temporary resource they acquire
    /// before returning, whether or not the export succeeded.
    fn export(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, CapabilityError>;
}

/// Hands a compose request to the host's registered mail handler.
pub trait MailComposer {
    /// Best-effort: success means the handler accepted the request, not that
    /// any mail was sent.
    fn compose(&mut self, request: &ComposeRequest) -> Result<(), CapabilityError>;
}

/// Blocking user dialogs.
///
/// Informational notices and destructive-action confirmations share one
/// capability; they differ only in whether the user can decline.
pub trait ConfirmationPrompt {
    /// Show `message` until the user dismisses it.
    fn notify(&mut self, message: &str) -> Result<(), CapabilityError>;

    /// Ask `message` and return `true` if the user confirmed.
    fn confirm(&mut self, message: &str) -> Result<bool, CapabilityError>;
}

/// The full set of capabilities a host injects into the widget.
pub struct HostCapabilities {
    pub exporter: Box<dyn FileExporter>,
    pub mailer: Box<dyn MailComposer>,
    pub prompt: Box<dyn ConfirmationPrompt>,
}

impl HostCapabilities {
    pub fn new(
        exporter: impl FileExporter + 'static,
        mailer: impl MailComposer + 'static,
        prompt: impl ConfirmationPrompt + 'static,
    ) -> Self {
        Self {
            exporter: Box::new(exporter),
            mailer: Box::new(mailer),
            prompt: Box::new(prompt),
        }
    }
}
