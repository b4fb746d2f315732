//! Mask and unmask commands - run the escape codec on a single component.

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use oxname_core::masking;

use crate::config::Settings;
use crate::output::print_json;

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// Component text
    pub text: String,
}

#[derive(Serialize)]
struct CodecOutput<'a> {
    input: &'a str,
    output: String,
}

fn emit(input: &str, output: String, settings: &Settings) -> Result<()> {
    if settings.json {
        return print_json(&CodecOutput { input, output });
    }
    println!("{output}");
    Ok(())
}

/// Escape the delimiter and the escape character in raw text.
#[instrument(level = "info", name = "cmd::mask", skip_all)]
pub fn mask(args: &Args, settings: &Settings) -> Result<()> {
    let masked = masking::mask(&args.text, settings.delimiter.as_char());
    emit(&args.text, masked, settings)
}

/// Strip escape characters from masked text.
#[instrument(level = "info", name = "cmd::unmask", skip_all)]
pub fn unmask(args: &Args, settings: &Settings) -> Result<()> {
    if !masking::is_properly_masked(&args.text, settings.delimiter.as_char()) {
        tracing::warn!(
            text = %args.text,
            delimiter = %settings.delimiter,
            "input is not properly masked for this delimiter"
        );
    }
    emit(&args.text, masking::unmask(&args.text), settings)
}
