//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use liquidvar::{ParamKind, TemplateVariable, TransformerDefinition, TransformerRegistry};

/// Format the transformer chain of a parsed variable as a table.
pub fn format_variable_table(variable: &TemplateVariable, registry: &TransformerRegistry) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Transformer", "Label", "Params"]);

    for (index, transformer) in variable.transformers.iter().enumerate() {
        let label = registry
            .get(&transformer.id)
            .map(|def| def.label.clone())
            .unwrap_or_default();
        table.add_row(vec![
            index.to_string(),
            transformer.id.clone(),
            label,
            transformer.params().join(", "),
        ]);
    }

    table
}

/// Format transformer definitions as a table.
pub fn format_registry_table(definitions: &[&TransformerDefinition]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Label", "Params", "Description"]);

    for def in definitions {
        let params: Vec<String> = def
            .param_specs
            .iter()
            .map(|spec| format!("{} ({})", spec.placeholder, kind_name(spec.kind)))
            .collect();
        table.add_row(vec![
            def.id.clone(),
            def.label.clone(),
            params.join(", "),
            def.description.clone(),
        ]);
    }

    table
}

fn kind_name(kind: ParamKind) -> &'static str {
    match kind {
        ParamKind::String => "string",
        ParamKind::Number => "number",
    }
}
