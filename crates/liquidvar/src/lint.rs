//! Lint rules for raw variable expressions.
//!
//! The parser is lenient and silently discards what it cannot use. These
//! rules report those discards so tooling can surface them.

use serde::Serialize;
use strsim::levenshtein;
use thiserror::Error;

use crate::parser::{
    DEFAULT_KEYWORD, split_params, split_segments, split_transformer_clause, strip_delimiters,
};
use crate::registry::TransformerRegistry;

/// A problem found in a raw variable expression.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LintWarning {
    /// The expression has no variable name.
    #[error("variable has no name")]
    EmptyName,

    /// A transformer id not in the registry. It is dropped when parsed.
    #[error("unknown transformer '{id}'{}", format_suggestions(.suggestions))]
    UnknownTransformer { id: String, suggestions: Vec<String> },

    /// Params given to a transformer that declares none. They are dropped.
    #[error("transformer '{id}' takes no parameters")]
    UnexpectedParams { id: String },

    /// More params than the transformer declares.
    #[error("transformer '{id}' expects at most {expected} parameters, got {got}")]
    TooManyParams {
        id: String,
        expected: usize,
        got: usize,
    },

    /// More than one default clause. Only the first is used.
    #[error("variable has more than one default value")]
    DuplicateDefault,
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Lint one raw variable expression against `registry`.
///
/// # Example
///
/// ```
/// use liquidvar::{LintWarning, TransformerRegistry, lint_variable};
///
/// let registry = TransformerRegistry::builtin();
/// let warnings = lint_variable("{{ name | upcse }}", &registry);
/// assert_eq!(warnings, vec![LintWarning::UnknownTransformer {
///     id: "upcse".to_string(),
///     suggestions: vec!["upcase".to_string()],
/// }]);
/// ```
pub fn lint_variable(raw: &str, registry: &TransformerRegistry) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut segments = split_segments(strip_delimiters(raw));
    let name_with_default = segments.next().unwrap_or_default();

    let mut defaults = name_with_default.matches(DEFAULT_KEYWORD).count();
    let name = match name_with_default.find(DEFAULT_KEYWORD) {
        Some(pos) => name_with_default[..pos].trim(),
        None => name_with_default,
    };
    if name.is_empty() {
        warnings.push(LintWarning::EmptyName);
    }

    for segment in segments {
        if segment.starts_with(DEFAULT_KEYWORD) {
            defaults += 1;
            continue;
        }
        if segment.is_empty() {
            continue;
        }
        lint_transformer(segment, registry, &mut warnings);
    }

    if defaults > 1 {
        warnings.push(LintWarning::DuplicateDefault);
    }
    warnings
}

fn lint_transformer(segment: &str, registry: &TransformerRegistry, warnings: &mut Vec<LintWarning>) {
    let (id, tail) = split_transformer_clause(segment);
    let Some(definition) = registry.get(id) else {
        warnings.push(LintWarning::UnknownTransformer {
            id: id.to_string(),
            suggestions: compute_suggestions(id, registry.ids()),
        });
        return;
    };

    let Some(tail) = tail.filter(|tail| !tail.is_empty()) else {
        return;
    };
    let got = split_params(tail).len();
    let expected = definition.param_specs.len();
    if expected == 0 {
        warnings.push(LintWarning::UnexpectedParams { id: id.to_string() });
    } else if got > expected {
        warnings.push(LintWarning::TooManyParams {
            id: id.to_string(),
            expected,
            got,
        });
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - Max distance 1 for names of length <= 3, otherwise 2
/// - At most 3 suggestions, closest first
pub fn compute_suggestions<'a>(name: &str, available: impl Iterator<Item = &'a str>) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
