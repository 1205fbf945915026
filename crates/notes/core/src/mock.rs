//! In-memory host capabilities for testing.
//!
//! [`MockHost`] records every capability call so tests can inspect what the
//! widget asked the host to do. Clones share the same recorder.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use crate::capability::{
    CapabilityError, ConfirmationPrompt, FileExporter, HostCapabilities, MailComposer,
};
use crate::mailto::ComposeRequest;

/// A file handed to the exporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
}

/// A compose request handed to the mail handler, with its rendered URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedMail {
    pub request: ComposeRequest,
    pub url: String,
}

#[derive(Default)]
struct Recorder {
    exports: Vec<ExportedFile>,
    mails: Vec<ComposedMail>,
    notices: Vec<String>,
    questions: Vec<String>,
    answers: VecDeque<bool>,
    fail_exports: bool,
    fail_mail: bool,
}

#[derive(Clone, Default)]
pub struct MockHost {
    recorder: Rc<RefCell<Recorder>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bundle three handles to this host for injection into a widget.
    pub fn capabilities(&self) -> HostCapabilities {
        HostCapabilities::new(self.clone(), self.clone(), self.clone())
    }

    /// Queue the answer for the next confirmation. Unanswered questions are
    /// treated as cancelled.
    pub fn answer_next(&self, confirmed: bool) {
        self.recorder.borrow_mut().answers.push_back(confirmed);
    }

    /// Make every subsequent export fail.
    pub fn fail_exports(&self) {
        self.recorder.borrow_mut().fail_exports = true;
    }

    /// Behave as if no mail handler is registered.
    pub fn fail_mail(&self) {
        self.recorder.borrow_mut().fail_mail = true;
    }

    pub fn exports(&self) -> Vec<ExportedFile> {
        self.recorder.borrow().exports.clone()
    }

    pub fn mails(&self) -> Vec<ComposedMail> {
        self.recorder.borrow().mails.clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.recorder.borrow().notices.clone()
    }

    pub fn questions(&self) -> Vec<String> {
        self.recorder.borrow().questions.clone()
    }
}

impl FileExporter for MockHost {
    fn export(&mut self, file_name: &str, contents: &str) -> Result<PathBuf, CapabilityError> {
        let mut recorder = self.recorder.borrow_mut();
        if recorder.fail_exports {
            return Err(CapabilityError::ExportDirectory("mock export failure".into()));
        }

        recorder.exports.push(ExportedFile {
            file_name: file_name.to_string(),
            contents: contents.to_string(),
        });
        Ok(PathBuf::from(file_name))
    }
}

impl MailComposer for MockHost {
    fn compose(&mut self, request: &ComposeRequest) -> Result<(), CapabilityError> {
        let mut recorder = self.recorder.borrow_mut();
        if recorder.fail_mail {
            return Err(CapabilityError::NoMailHandler("mock has no handler".into()));
        }

        recorder.mails.push(ComposedMail {
            request: request.clone(),
            url: request.to_url(),
        });
        Ok(())
    }
}

impl ConfirmationPrompt for MockHost {
    fn notify(&mut self, message: &str) -> Result<(), CapabilityError> {
        self.recorder.borrow_mut().notices.push(message.to_string());
        Ok(())
    }

    fn confirm(&mut self, message: &str) -> Result<bool, CapabilityError> {
        let mut recorder = self.recorder.borrow_mut();
        recorder.questions.push(message.to_string());
        Ok(recorder.answers.pop_front().unwrap_or(false))
    }
}
