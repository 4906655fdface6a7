//! Transformer registry and name-based suggestions.
//!
//! The registry is an ordered, immutable catalog of transformer definitions.
//! It is passed explicitly to the parser, formatter and editor so callers can
//! substitute their own catalog.

mod error;
mod suggest;
mod transformers;

pub use error::RegistryError;
pub use suggest::suggest_transformers;
pub use transformers::TransformerRegistry;
