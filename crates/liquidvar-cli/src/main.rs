//! liquidvar CLI entry point.
//!
//! Provides command-line tools for working with variable expressions:
//! - `liquidvar parse` - Show the structured form of an expression
//! - `liquidvar format` - Print the canonical form of an expression
//! - `liquidvar transformers` - List or search known transformers
//! - `liquidvar suggest` - Suggest transformers for a variable name
//! - `liquidvar check` - Lint every expression in template files

mod commands;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_format, run_parse, run_suggest, run_transformers, CheckArgs, FormatArgs,
    ParseArgs, SuggestArgs, TransformersArgs,
};
use liquidvar::TransformerRegistry;
use miette::miette;

/// Liquid variable expression tools.
#[derive(Debug, Parser)]
#[command(name = "liquidvar")]
#[command(about = "Liquid variable expression tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with transformer definitions, replacing the built-in catalog
    #[arg(long, env = "LIQUIDVAR_REGISTRY", global = true)]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the structured form of an expression
    Parse(ParseArgs),
    /// Print the canonical form of an expression
    Format(FormatArgs),
    /// List or search known transformers
    Transformers(TransformersArgs),
    /// Suggest transformers for a variable name
    Suggest(SuggestArgs),
    /// Lint every expression in template files
    Check(CheckArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Load the registry named on the command line, or the built-in catalog.
fn load_registry(path: Option<&PathBuf>) -> miette::Result<TransformerRegistry> {
    match path {
        Some(path) => {
            let registry = TransformerRegistry::load(path).map_err(|e| miette!("{}", e))?;
            tracing::debug!(path = %path.display(), count = registry.len(), "loaded custom registry");
            Ok(registry)
        }
        None => Ok(TransformerRegistry::builtin()),
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    logging::init(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let registry = load_registry(cli.registry.as_ref())?;

    let result = match cli.command {
        Commands::Parse(args) => run_parse(args, &registry),
        Commands::Format(args) => run_format(args, &registry),
        Commands::Transformers(args) => run_transformers(args, &registry),
        Commands::Suggest(args) => run_suggest(args, &registry),
        Commands::Check(args) => run_check(args, &registry),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
