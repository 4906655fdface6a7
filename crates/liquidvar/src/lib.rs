pub mod editor;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod registry;
pub mod types;

pub use editor::{EditAction, EditError, EditSession, apply_action, normalize_param};
pub use formatter::format_variable;
pub use lint::{LintWarning, lint_variable};
pub use parser::{VariableToken, find_variables, parse_variable, replace_variable};
pub use registry::{RegistryError, TransformerRegistry, suggest_transformers};
pub use types::{
    ParamKind, ParamSpec, TemplateVariable, TransformerApplication, TransformerDefinition,
};
