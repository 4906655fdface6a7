//! Implementation of the `liquidvar format` command.

use liquidvar::{format_variable, parse_variable, TransformerRegistry};

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Variable expression, with or without the surrounding {{ }}
    pub expression: String,

    /// Exit with a non-zero code if the expression is not already canonical
    #[arg(long)]
    pub check: bool,
}

/// Run the format command.
pub fn run_format(args: FormatArgs, registry: &TransformerRegistry) -> miette::Result<i32> {
    let canonical = format_variable(&parse_variable(&args.expression, registry), registry);
    println!("{}", canonical);

    if args.check && canonical != args.expression.trim() {
        eprintln!("expression is not in canonical form");
        return Ok(exitcode::DATAERR);
    }
    Ok(exitcode::OK)
}
