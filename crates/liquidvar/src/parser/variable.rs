use tracing::trace;

use crate::parser::{DEFAULT_KEYWORD, extract_default, split_params, split_transformer_clause};
use crate::registry::TransformerRegistry;
use crate::types::{TemplateVariable, TransformerApplication};

/// Parse a raw variable expression.
///
/// Accepts the text with or without the surrounding `{{ }}`. Never fails:
/// a missing name becomes an empty string, an unparseable default becomes
/// an empty default, and transformers unknown to `registry` are dropped.
///
/// Parameters are kept only for transformers whose definition declares
/// them. The parameter tail is split naively on `,`.
///
/// # Example
///
/// ```
/// use liquidvar::{TransformerRegistry, parse_variable};
///
/// let registry = TransformerRegistry::builtin();
/// let variable = parse_variable("{{ name | default: 'there' | truncate: 10, '...' }}", &registry);
///
/// assert_eq!(variable.name, "name");
/// assert_eq!(variable.default_value, "there");
/// assert_eq!(variable.transformers[0].params(), ["10", "..."]);
/// ```
pub fn parse_variable(raw: &str, registry: &TransformerRegistry) -> TemplateVariable {
    let body = strip_delimiters(raw);
    if body.is_empty() {
        return TemplateVariable::default();
    }

    let mut segments = split_segments(body);
    let name_with_default = segments.next().unwrap_or_default();

    let (name, mut default_value) = match name_with_default.find(DEFAULT_KEYWORD) {
        Some(pos) => (
            name_with_default[..pos].trim(),
            extract_default(name_with_default),
        ),
        None => (name_with_default, None),
    };

    let mut transformers = Vec::new();
    for segment in segments {
        if segment.starts_with(DEFAULT_KEYWORD) {
            if default_value.is_none() {
                default_value = extract_default(segment);
            }
            continue;
        }
        if let Some(transformer) = parse_transformer(segment, registry) {
            transformers.push(transformer);
        }
    }

    TemplateVariable {
        name: name.to_string(),
        default_value: default_value.unwrap_or_default(),
        transformers,
    }
}

/// Remove one surrounding `{{ }}` pair and the whitespace inside it.
pub(crate) fn strip_delimiters(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("{{").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("}}").unwrap_or(trimmed);
    trimmed.trim()
}

/// Split an expression body on `|`, trimming each segment.
pub(crate) fn split_segments(body: &str) -> impl Iterator<Item = &str> {
    body.split('|').map(str::trim)
}

fn parse_transformer(segment: &str, registry: &TransformerRegistry) -> Option<TransformerApplication> {
    let (id, tail) = split_transformer_clause(segment);
    let Some(definition) = registry.get(id) else {
        if !id.is_empty() {
            trace!(id, "dropping unknown transformer");
        }
        return None;
    };

    let params = match tail {
        Some(tail) if definition.has_params() && !tail.is_empty() => Some(split_params(tail)),
        _ => None,
    };

    Some(TransformerApplication {
        id: id.to_string(),
        params,
    })
}
