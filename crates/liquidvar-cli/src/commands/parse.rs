//! Implementation of the `liquidvar parse` command.

use liquidvar::{parse_variable, TransformerRegistry};
use miette::IntoDiagnostic;

use crate::output::table::format_variable_table;

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Variable expression, with or without the surrounding {{ }}
    pub expression: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs, registry: &TransformerRegistry) -> miette::Result<i32> {
    let variable = parse_variable(&args.expression, registry);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&variable).into_diagnostic()?);
    } else {
        println!("name:    {}", variable.name);
        if variable.has_default() {
            println!("default: {}", variable.default_value);
        }
        if !variable.transformers.is_empty() {
            println!("{}", format_variable_table(&variable, registry));
        }
    }

    Ok(exitcode::OK)
}
