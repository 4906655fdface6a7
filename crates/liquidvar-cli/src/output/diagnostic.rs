//! Miette diagnostic wrapper for variable lint warnings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use liquidvar::{LintWarning, VariableToken};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for one lint warning on one variable.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(liquidvar::lint), severity(Warning))]
pub struct LintDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("in this variable")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LintDiagnostic {
    /// Create a diagnostic pointing at `token` inside `content`.
    pub fn from_warning(
        path: &Path,
        content: &str,
        token: &VariableToken,
        warning: &LintWarning,
    ) -> Self {
        let help = match warning {
            LintWarning::UnknownTransformer { suggestions, .. } if !suggestions.is_empty() => {
                Some(format!("did you mean '{}'?", suggestions[0]))
            }
            LintWarning::UnknownTransformer { .. } => {
                Some("run `liquidvar transformers` to list known transformers".into())
            }
            LintWarning::UnexpectedParams { .. } | LintWarning::TooManyParams { .. } => {
                Some("extra parameters are dropped when the variable is edited".into())
            }
            LintWarning::EmptyName | LintWarning::DuplicateDefault => None,
        };

        // Clamp to content length to avoid miette panic on out-of-bounds
        let start = token.span.start.min(content.len());
        let len = token.span.end.min(content.len()) - start;

        LintDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (start, len).into(),
            message: warning.to_string(),
            help,
        }
    }
}
