use bon::Builder;
use liquidvar_catalog::{ParamEntry, ParamKind as CatalogKind, TransformerEntry};
use serde::{Deserialize, Serialize};

/// Declared type of a transformer parameter.
///
/// Number parameters are written bare in the canonical form; everything else
/// is single-quoted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    String,
    Number,
}

impl From<CatalogKind> for ParamKind {
    fn from(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::String => ParamKind::String,
            CatalogKind::Number => ParamKind::Number,
        }
    }
}

/// Metadata for one positional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ParamSpec {
    pub placeholder: String,
    #[builder(default)]
    #[serde(default)]
    pub description: String,
    #[builder(default)]
    #[serde(rename = "type", default)]
    pub kind: ParamKind,
}

impl From<&ParamEntry> for ParamSpec {
    fn from(entry: &ParamEntry) -> Self {
        Self {
            placeholder: entry.placeholder.to_string(),
            description: entry.description.to_string(),
            kind: entry.kind.into(),
        }
    }
}

/// Describes one known transformer.
///
/// # Example
///
/// ```
/// use liquidvar::{ParamKind, ParamSpec, TransformerDefinition};
///
/// let def = TransformerDefinition::builder()
///     .id("repeat")
///     .label("Repeat")
///     .param_specs(vec![
///         ParamSpec::builder().placeholder("Times").kind(ParamKind::Number).build(),
///     ])
///     .build();
///
/// assert!(def.has_params());
/// assert_eq!(def.param_kind(0), Some(ParamKind::Number));
/// assert_eq!(def.param_kind(1), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
#[serde(rename_all = "camelCase")]
pub struct TransformerDefinition {
    pub id: String,
    pub label: String,
    #[builder(default)]
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub param_specs: Vec<ParamSpec>,
}

impl TransformerDefinition {
    pub fn has_params(&self) -> bool {
        !self.param_specs.is_empty()
    }

    /// Declared kind of the parameter at `index`, if declared.
    pub fn param_kind(&self, index: usize) -> Option<ParamKind> {
        self.param_specs.get(index).map(|spec| spec.kind)
    }
}

impl From<&TransformerEntry> for TransformerDefinition {
    fn from(entry: &TransformerEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            label: entry.label.to_string(),
            description: entry.description.to_string(),
            example: entry.example.map(str::to_string),
            param_specs: entry.params.iter().map(ParamSpec::from).collect(),
        }
    }
}
