//! Roster Console
//!
//! Terminal front end for the Roster user API: form validation and
//! transformation, one view per user action, and text rendering.

pub mod form;
pub mod render;
pub mod views;

pub use form::{FieldInput, UserForm};
pub use render::render;
pub use views::Page;
