#![deny(unsafe_code)]

mod commands;
mod config;
mod exit_code;
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use oxname_core::{ErrorKind, NameError};

use crate::commands::{Backend, codec, convert, edit, eq, show, split};
use crate::config::{Config, Settings};

/// Command-line interface for hierarchical, escape-aware names
#[derive(Parser)]
#[command(name = "oxname")]
#[command(author, version)]
#[command(propagate_version = true)]
#[command(after_help = "EXAMPLES:
    # List the components of a name
    oxname split 'oss\\.cs.fau.de'

    # Render a '/'-delimited name with dots
    oxname --delimiter / convert usr/local/bin --to .

    # Apply edits in order and print the result
    oxname edit oss.cs.fau.de insert:0:www set:2:informatik

    # Compare names across delimiters
    oxname eq oss.cs 'oss#cs' --right-delimiter '#'
")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Delimiter for reading and writing names (default: '.', or config file)
    #[arg(short, long, value_name = "DELIM", global = true)]
    delimiter: Option<String>,

    /// Storage backend used to build names
    #[arg(short, long, value_enum, global = true)]
    backend: Option<Backend>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the components of a name
    Split(split::Args),

    /// Show component count, renderings and hash code
    Show(show::Args),

    /// Render a name with another delimiter
    Convert(convert::Args),

    /// Escape one raw component
    Mask(codec::Args),

    /// Unescape one masked component
    Unmask(codec::Args),

    /// Compare two names
    Eq(eq::Args),

    /// Apply edit operations to a name
    Edit(edit::Args),
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_error(&e),
    };
    let quiet = cli.quiet;

    match run(cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS),
        Err(e) => {
            if !quiet {
                eprintln!("Error: {e:#}");
            }
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Print a clap parse failure (or help/version output) and pick its exit code.
fn usage_error(e: &clap::Error) -> ExitCode {
    // Help and version requests come back as errors that print to stdout
    let code = if e.use_stderr() {
        exit_code::USAGE_ERROR
    } else {
        exit_code::SUCCESS
    };
    if let Err(io_err) = e.print() {
        eprintln!("Error: {io_err}");
    }
    ExitCode::from(code)
}

fn run(cli: Cli) -> Result<()> {
    // Set up tracing based on verbosity (skip if quiet)
    if !cli.quiet {
        setup_tracing(cli.verbose);
    }

    let config = Config::load()?;
    let settings = Settings::resolve(cli.delimiter.as_deref(), cli.backend, cli.json, &config)?;
    tracing::debug!(?settings, "resolved settings");

    match cli.command {
        Commands::Split(args) => split::execute(&args, &settings),
        Commands::Show(args) => show::execute(&args, &settings),
        Commands::Convert(args) => convert::execute(&args, &settings),
        Commands::Mask(args) => codec::mask(&args, &settings),
        Commands::Unmask(args) => codec::unmask(&args, &settings),
        Commands::Eq(args) => eq::execute(&args, &settings),
        Commands::Edit(args) => edit::execute(&args, &settings),
    }
}

/// Set up tracing/logging based on verbosity level
fn setup_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();
}

/// Categorize an error into an exit code using typed error downcasting
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(name_err) = cause.downcast_ref::<NameError>() {
            return match name_err.kind() {
                ErrorKind::InvalidArgument => exit_code::INVALID_ARGUMENT,
                ErrorKind::InternalInvariantViolation => exit_code::INTERNAL_ERROR,
            };
        }
    }

    exit_code::GENERAL_ERROR
}
