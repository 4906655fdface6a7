//! Canonical formatting of variable expressions.
//!
//! The inverse of [`parse_variable`](crate::parser::parse_variable): for any
//! string this module produces, parsing and formatting again yields the same
//! string.

use crate::registry::TransformerRegistry;
use crate::types::{ParamKind, TemplateVariable, TransformerApplication};

/// Separator placed between the name, default and transformer parts.
const PART_SEPARATOR: &str = " | ";

/// Format a variable as its canonical `{{ ... }}` string.
///
/// Parts are the trimmed name, `default: '<value>'` when a default is set,
/// and one part per transformer. A transformer is written as its bare id when
/// its params format to nothing (none set, or only empty numbers) or its
/// definition declares none (this includes ids unknown to `registry`). Otherwise number params are written bare and all
/// other params are single-quoted.
///
/// # Example
///
/// ```
/// use liquidvar::{TemplateVariable, TransformerApplication, TransformerRegistry, format_variable};
///
/// let registry = TransformerRegistry::builtin();
/// let variable = TemplateVariable::builder()
///     .name("payload.title".to_string())
///     .default_value("n/a".to_string())
///     .transformers(vec![TransformerApplication::with_params("truncate", ["20", "..."])])
///     .build();
///
/// assert_eq!(
///     format_variable(&variable, &registry),
///     "{{ payload.title | default: 'n/a' | truncate: 20, '...' }}"
/// );
/// ```
pub fn format_variable(variable: &TemplateVariable, registry: &TransformerRegistry) -> String {
    let mut parts: Vec<String> = vec![variable.name.trim().to_string()];

    if !variable.default_value.is_empty() {
        parts.push(format!("default: '{}'", escape_quotes(&variable.default_value)));
    }

    for transformer in &variable.transformers {
        parts.push(format_transformer(transformer, registry));
    }

    format!("{{{{ {} }}}}", parts.join(PART_SEPARATOR))
}

/// Escape single quotes for a single-quoted literal.
pub fn escape_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

fn format_transformer(transformer: &TransformerApplication, registry: &TransformerRegistry) -> String {
    let params = transformer.params();
    let definition = registry
        .get(&transformer.id)
        .filter(|definition| definition.has_params());

    let Some(definition) = definition else {
        return transformer.id.clone();
    };

    let formatted: Vec<String> = params
        .iter()
        .enumerate()
        .map(|(index, value)| format_param(value, definition.param_kind(index)))
        .collect();
    let tail = formatted.join(", ");
    // An empty tail parses back as no params.
    if tail.is_empty() {
        return transformer.id.clone();
    }
    format!("{}: {tail}", transformer.id)
}

fn format_param(value: &str, kind: Option<ParamKind>) -> String {
    match kind {
        Some(ParamKind::Number) => value.to_string(),
        Some(ParamKind::String) | None => format!("'{}'", escape_quotes(value)),
    }
}
