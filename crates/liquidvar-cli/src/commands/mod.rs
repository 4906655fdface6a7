//! CLI command implementations.

mod check;
mod format;
mod parse;
mod suggest;
mod transformers;

pub use check::{run_check, CheckArgs};
pub use format::{run_format, FormatArgs};
pub use parse::{run_parse, ParseArgs};
pub use suggest::{run_suggest, SuggestArgs};
pub use transformers::{run_transformers, TransformersArgs};
