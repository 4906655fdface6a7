use bon::Builder;
use serde::{Deserialize, Serialize};

/// The structured form of one `{{ ... }}` variable expression.
///
/// Constructed by [`parse_variable`](crate::parser::parse_variable) when an
/// editor opens and turned back into text by
/// [`format_variable`](crate::formatter::format_variable) after every edit.
///
/// # Example
///
/// ```
/// use liquidvar::{TemplateVariable, TransformerApplication};
///
/// let variable = TemplateVariable::builder()
///     .name("payload.firstName".to_string())
///     .default_value("there".to_string())
///     .transformers(vec![TransformerApplication::new("capitalize")])
///     .build();
///
/// assert!(variable.has_default());
/// assert!(variable.has_transformer("capitalize"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateVariable {
    /// Dotted variable path, e.g. `payload.amount`. Never contains `|`.
    #[builder(default)]
    pub name: String,

    /// Fallback literal. Empty means no default.
    #[builder(default)]
    #[serde(default)]
    pub default_value: String,

    /// Transformers applied left to right after default resolution.
    #[builder(default)]
    #[serde(default)]
    pub transformers: Vec<TransformerApplication>,
}

impl TemplateVariable {
    /// A variable with only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_default(&self) -> bool {
        !self.default_value.is_empty()
    }

    /// Whether a transformer with this id is already applied.
    pub fn has_transformer(&self, id: &str) -> bool {
        self.transformers.iter().any(|t| t.id == id)
    }

    /// Ids of the applied transformers, in application order.
    pub fn transformer_ids(&self) -> impl Iterator<Item = &str> {
        self.transformers.iter().map(|t| t.id.as_str())
    }
}

/// One transformer invocation within a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransformerApplication {
    /// Registry key of the transformer.
    pub id: String,

    /// Positional parameter values. Only present when the transformer
    /// declares parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<String>>,
}

impl TransformerApplication {
    /// An application without parameters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: None,
        }
    }

    /// An application with positional parameters.
    pub fn with_params<I, S>(id: impl Into<String>, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            params: Some(params.into_iter().map(Into::into).collect()),
        }
    }

    /// Parameter values, empty when none are set.
    pub fn params(&self) -> &[String] {
        self.params.as_deref().unwrap_or_default()
    }
}
