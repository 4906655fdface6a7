//! Editing state for a single variable.
//!
//! Edits are expressed as [`EditAction`] values reduced over a
//! [`TemplateVariable`](crate::types::TemplateVariable) by [`apply_action`].
//! [`EditSession`] wraps the reducer, formats the result after every edit and
//! hands the new raw string to a callback.

mod action;
mod error;
mod session;

pub use action::{EditAction, apply_action, normalize_param};
pub use error::EditError;
pub use session::EditSession;
