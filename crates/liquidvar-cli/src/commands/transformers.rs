//! Implementation of the `liquidvar transformers` command.

use liquidvar::TransformerRegistry;
use miette::IntoDiagnostic;

use crate::output::table::format_registry_table;

/// Arguments for the transformers command.
#[derive(Debug, clap::Args)]
pub struct TransformersArgs {
    /// Only list transformers whose id, label or description contains this text
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the transformers command.
pub fn run_transformers(
    args: TransformersArgs,
    registry: &TransformerRegistry,
) -> miette::Result<i32> {
    let matches = registry.search(&args.query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches).into_diagnostic()?);
    } else if matches.is_empty() {
        println!("No transformers match '{}'", args.query);
    } else {
        println!("{}", format_registry_table(&matches));
    }

    Ok(exitcode::OK)
}
