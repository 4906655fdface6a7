use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use tracing::debug;

use crate::editor::{EditAction, EditError, apply_action};
use crate::formatter::format_variable;
use crate::parser::parse_variable;
use crate::registry::{TransformerRegistry, suggest_transformers};
use crate::types::{TemplateVariable, TransformerDefinition};

/// Edit state for one open variable editor.
///
/// Every successful edit is formatted and passed to the change callback
/// exactly once. A failed edit leaves the state untouched and emits nothing.
/// There is no undo and no pending state.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use liquidvar::{EditSession, TransformerRegistry};
///
/// let registry = Arc::new(TransformerRegistry::builtin());
/// let mut emitted = Vec::new();
/// {
///     let mut session = EditSession::open("{{ name }}", registry, |raw| emitted.push(raw.to_string()));
///     session.toggle("upcase");
///     session.set_default("friend");
/// }
/// assert_eq!(emitted, vec![
///     "{{ name | upcase }}",
///     "{{ name | default: 'friend' | upcase }}",
/// ]);
/// ```
pub struct EditSession<'a> {
    registry: Arc<TransformerRegistry>,
    variable: TemplateVariable,
    raw: String,
    on_change: Box<dyn FnMut(&str) + 'a>,
}

impl<'a> EditSession<'a> {
    /// Open a session on `raw`, calling `on_change` with the new raw string
    /// after every edit.
    pub fn open(
        raw: impl Into<String>,
        registry: Arc<TransformerRegistry>,
        on_change: impl FnMut(&str) + 'a,
    ) -> Self {
        let raw = raw.into();
        let variable = parse_variable(&raw, &registry);
        Self {
            registry,
            variable,
            raw,
            on_change: Box::new(on_change),
        }
    }

    /// The structured view of the variable.
    pub fn variable(&self) -> &TemplateVariable {
        &self.variable
    }

    /// The last raw string, as opened or emitted.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn registry(&self) -> &TransformerRegistry {
        &self.registry
    }

    /// Apply an edit, emit the formatted result and return it.
    pub fn apply(&mut self, action: &EditAction) -> Result<&str, EditError> {
        let next = apply_action(&self.variable, action, &self.registry)?;
        self.commit(next, action);
        Ok(&self.raw)
    }

    /// Add the transformer if absent, remove it if present.
    pub fn toggle(&mut self, id: impl Into<String>) -> &str {
        self.apply_infallible(&EditAction::toggle(id))
    }

    /// Move the transformer at `from` to `to`.
    pub fn move_transformer(&mut self, from: usize, to: usize) -> Result<&str, EditError> {
        self.apply(&EditAction::Move { from, to })
    }

    /// Replace the params of the transformer at `index`.
    pub fn set_params<I, S>(&mut self, index: usize, params: I) -> Result<&str, EditError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apply(&EditAction::set_params(index, params))
    }

    pub fn rename(&mut self, name: impl Into<String>) -> &str {
        self.apply_infallible(&EditAction::Rename { name: name.into() })
    }

    pub fn set_default(&mut self, value: impl Into<String>) -> &str {
        self.apply_infallible(&EditAction::SetDefault {
            value: value.into(),
        })
    }

    /// Replace the raw text directly.
    ///
    /// The text is emitted verbatim, so transformers unknown to the registry
    /// survive. The structured view is re-parsed from it.
    pub fn set_raw(&mut self, raw: impl Into<String>) -> &str {
        let raw = raw.into();
        debug!(%raw, "raw variable edit");
        self.variable = parse_variable(&raw, &self.registry);
        self.emit(raw);
        &self.raw
    }

    /// Suggested transformers for the current name, excluding applied ones.
    pub fn suggestions(&self) -> Vec<String> {
        suggest_transformers(
            &self.variable.name,
            &self.variable.transformers,
            &self.registry,
        )
    }

    /// Registry entries matching `query`, for the add-transformer picker.
    pub fn search(&self, query: &str) -> Vec<&TransformerDefinition> {
        self.registry.search(query)
    }

    /// Apply an action that never addresses an index.
    fn apply_infallible(&mut self, action: &EditAction) -> &str {
        if let Ok(next) = apply_action(&self.variable, action, &self.registry) {
            self.commit(next, action);
        }
        &self.raw
    }

    fn commit(&mut self, next: TemplateVariable, action: &EditAction) {
        let raw = format_variable(&next, &self.registry);
        debug!(?action, %raw, "applied variable edit");
        self.variable = next;
        self.emit(raw);
    }

    fn emit(&mut self, raw: String) {
        self.raw = raw;
        (self.on_change)(&self.raw);
    }
}

impl Debug for EditSession<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("EditSession")
            .field("variable", &self.variable)
            .field("raw", &self.raw)
            .finish_non_exhaustive()
    }
}
