mod definition;
mod variable;

pub use definition::{ParamKind, ParamSpec, TransformerDefinition};
pub use variable::{TemplateVariable, TransformerApplication};
