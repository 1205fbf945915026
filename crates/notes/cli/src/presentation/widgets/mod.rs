//! Panels composed by [`crate::presentation::ui::render`].
pub mod actions;
pub mod banner;
pub mod footer;
pub mod header;
pub mod instructions;
pub mod notes;
pub mod status;
