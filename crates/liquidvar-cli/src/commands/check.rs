//! Implementation of the `liquidvar check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use liquidvar::{find_variables, lint_variable, LintWarning, TransformerRegistry};
use miette::{miette, IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::LintDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one finding.
#[derive(Debug, Serialize)]
struct Finding {
    file: String,
    line: usize,
    column: usize,
    variable: String,
    warning: LintWarning,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, registry: &TransformerRegistry) -> miette::Result<i32> {
    let mut findings = Vec::new();
    let mut variable_count = 0;

    for path in &args.files {
        let content = read_to_string(path)
            .into_diagnostic()
            .map_err(|e| miette!("Failed to read {}: {}", path.display(), e))?;

        let tokens = find_variables(&content);
        tracing::debug!(file = %path.display(), variables = tokens.len(), "scanned template");
        variable_count += tokens.len();

        for token in &tokens {
            for warning in lint_variable(&token.raw, registry) {
                if !args.json {
                    let diagnostic = LintDiagnostic::from_warning(path, &content, token, &warning);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                let (line, column) = token.position(&content);
                findings.push(Finding {
                    file: path.display().to_string(),
                    line,
                    column,
                    variable: token.raw.clone(),
                    warning,
                });
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&findings).into_diagnostic()?);
    } else if findings.is_empty() {
        println!(
            "{} {} variable(s) in {} file(s), no warnings",
            "ok:".if_supports_color(Stream::Stdout, |t| t.green()),
            variable_count,
            args.files.len()
        );
    } else {
        println!(
            "{} {} warning(s) in {} variable(s)",
            "warning:".if_supports_color(Stream::Stdout, |t| t.yellow()),
            findings.len(),
            variable_count
        );
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
