//! Convert command - render a name with a different delimiter.
//!
//! The target delimiter is not escaped inside components, so the output is for
//! display and may not parse back to the same name.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use crate::config::Settings;
use crate::output::print_json;

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// Delimited name, components in masked form
    pub name: String,

    /// Delimiter to render with (one character)
    #[arg(long, value_name = "DELIM")]
    pub to: String,
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    from: String,
    to: &'a str,
    result: String,
}

#[instrument(level = "info", name = "cmd::convert", skip_all, fields(to = %args.to))]
pub fn execute(args: &Args, settings: &Settings) -> Result<()> {
    let name = settings.backend.build(&args.name, settings.delimiter);
    let result = name
        .as_string_with(&args.to)
        .context("Invalid --to delimiter")?;

    if settings.json {
        return print_json(&ConvertOutput {
            from: settings.delimiter.to_string(),
            to: &args.to,
            result,
        });
    }

    println!("{result}");
    Ok(())
}
