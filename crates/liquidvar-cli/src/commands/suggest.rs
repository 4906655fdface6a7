//! Implementation of the `liquidvar suggest` command.

use liquidvar::{suggest_transformers, TransformerApplication, TransformerRegistry};
use serde::Serialize;

/// Arguments for the suggest command.
#[derive(Debug, clap::Args)]
pub struct SuggestArgs {
    /// Variable name, e.g. payload.createdAt
    pub name: String,

    /// Transformers already applied (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub applied: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one suggestion.
#[derive(Serialize)]
struct Suggestion<'a> {
    id: &'a str,
    label: &'a str,
}

/// Run the suggest command.
pub fn run_suggest(args: SuggestArgs, registry: &TransformerRegistry) -> miette::Result<i32> {
    let applied: Vec<TransformerApplication> = args
        .applied
        .iter()
        .map(|id| TransformerApplication::new(id.trim()))
        .collect();
    let ids = suggest_transformers(&args.name, &applied, registry);

    let suggestions: Vec<Suggestion<'_>> = ids
        .iter()
        .filter_map(|id| registry.get(id))
        .map(|def| Suggestion {
            id: &def.id,
            label: &def.label,
        })
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&suggestions)
                .expect("JSON serialization should not fail")
        );
    } else if suggestions.is_empty() {
        println!("No suggestions for '{}'", args.name);
    } else {
        for suggestion in &suggestions {
            println!("{:<12} {}", suggestion.id, suggestion.label);
        }
    }

    Ok(exitcode::OK)
}
