use serde::{Deserialize, Serialize};

use crate::editor::EditError;
use crate::parser::DEFAULT_KEYWORD;
use crate::registry::TransformerRegistry;
use crate::types::{ParamKind, TemplateVariable, TransformerApplication};

/// A single edit to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditAction {
    /// Remove the transformer if applied, otherwise append it without params.
    Toggle { id: String },
    /// Move the transformer at `from` so it ends up at `to`.
    Move { from: usize, to: usize },
    /// Replace the params of the transformer at `index`.
    SetParams { index: usize, params: Vec<String> },
    /// Replace the variable name, without `|` or `default:`.
    Rename { name: String },
    /// Replace the default value. Empty clears it.
    SetDefault { value: String },
}

impl EditAction {
    pub fn toggle(id: impl Into<String>) -> Self {
        Self::Toggle { id: id.into() }
    }

    pub fn set_params<I, S>(index: usize, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::SetParams {
            index,
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

/// Apply `action` to `variable`, returning the edited copy.
///
/// `Move` clamps `to` to the end of the chain. `SetParams` normalizes each
/// value against the declared parameter kind (see [`normalize_param`]); an
/// unknown transformer leaves values untouched.
///
/// # Errors
///
/// Returns [`EditError::IndexOutOfRange`] when `Move::from` or
/// `SetParams::index` does not address an applied transformer.
pub fn apply_action(
    variable: &TemplateVariable,
    action: &EditAction,
    registry: &TransformerRegistry,
) -> Result<TemplateVariable, EditError> {
    let mut next = variable.clone();
    match action {
        EditAction::Toggle { id } => {
            if let Some(pos) = next.transformers.iter().position(|t| &t.id == id) {
                next.transformers.remove(pos);
            } else {
                next.transformers.push(TransformerApplication::new(id.clone()));
            }
        }
        EditAction::Move { from, to } => {
            let len = next.transformers.len();
            if *from >= len {
                return Err(EditError::IndexOutOfRange { index: *from, len });
            }
            let moved = next.transformers.remove(*from);
            let to = (*to).min(next.transformers.len());
            next.transformers.insert(to, moved);
        }
        EditAction::SetParams { index, params } => {
            let len = next.transformers.len();
            let Some(transformer) = next.transformers.get_mut(*index) else {
                return Err(EditError::IndexOutOfRange { index: *index, len });
            };
            let definition = registry.get(&transformer.id);
            let normalized = params
                .iter()
                .enumerate()
                .map(|(i, value)| normalize_param(value, definition.and_then(|d| d.param_kind(i))))
                .collect();
            transformer.params = Some(normalized);
        }
        EditAction::Rename { name } => {
            next.name = clean_name(name);
        }
        EditAction::SetDefault { value } => {
            next.default_value = value.clone();
        }
    }
    Ok(next)
}

/// Remove `|` and every `default:` keyword from a name, then trim it.
fn clean_name(name: &str) -> String {
    let mut cleaned = name.replace('|', "");
    while cleaned.contains(DEFAULT_KEYWORD) {
        cleaned = cleaned.replace(DEFAULT_KEYWORD, "");
    }
    cleaned.trim().to_string()
}

/// Normalize a parameter value for its declared kind.
///
/// Number params keep only digits, `.` and `-`, and become empty unless what
/// remains parses as a finite number. Other kinds pass through.
///
/// # Example
///
/// ```
/// use liquidvar::{ParamKind, normalize_param};
///
/// assert_eq!(normalize_param("12abc", Some(ParamKind::Number)), "12");
/// assert_eq!(normalize_param("abc", Some(ParamKind::Number)), "");
/// assert_eq!(normalize_param("abc", None), "abc");
/// ```
pub fn normalize_param(value: &str, kind: Option<ParamKind>) -> String {
    match kind {
        Some(ParamKind::Number) => {
            let kept: String = value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            match kept.parse::<f64>() {
                Ok(n) if n.is_finite() => kept,
                _ => String::new(),
            }
        }
        Some(ParamKind::String) | None => value.to_string(),
    }
}
