//! Variable expression parser.
//!
//! This module turns the raw `{{ name | default: 'x' | transformer: p }}`
//! text into a [`TemplateVariable`](crate::types::TemplateVariable), and
//! locates such expressions inside larger template bodies. Parsing is lenient
//! and never fails: malformed input yields a best-effort partial result.

mod clause;
mod document;
mod variable;

pub use document::{VariableToken, find_variables, replace_variable};
pub use variable::parse_variable;

pub(crate) use clause::{DEFAULT_KEYWORD, extract_default, split_params, split_transformer_clause};
pub(crate) use variable::{split_segments, strip_delimiters};
