//! Host-agnostic model of the assignment notes widget.
//!
//! Houses the brief text, the transient note state and the capability traits a
//! host implements to export, email and confirm. The terminal frontend in
//! `notes-cli` is one such host; tests use the doubles in [`mock`].
pub mod brief;
pub mod capability;
pub mod mailto;
pub mod mock;
pub mod timestamp;
pub mod widget;

pub use capability::{
    CapabilityError, ConfirmationPrompt, FileExporter, HostCapabilities, MailComposer,
};
pub use mailto::ComposeRequest;
pub use timestamp::TimestampFormat;
pub use widget::{ActionOutcome, NoteAction, NotesWidget};
