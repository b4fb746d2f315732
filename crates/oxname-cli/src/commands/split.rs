//! Split command - tokenize a name and list its components.
//!
//! # Examples
//!
//! ```bash
//! oxname split 'oss\.cs.fau.de'
//! oxname --delimiter / --json split 'usr/local/bin'
//! ```

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use crate::config::Settings;
use crate::output::{create_table, display_component, print_json};

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// Delimited name, components in masked form
    pub name: String,
}

/// JSON output format for split command
#[derive(Serialize)]
struct SplitOutput {
    delimiter: String,
    no_components: usize,
    components: Vec<ComponentInfo>,
}

#[derive(Serialize)]
struct ComponentInfo {
    index: usize,
    masked: String,
    unmasked: String,
}

#[instrument(level = "info", name = "cmd::split", skip_all, fields(backend = settings.backend.as_str()))]
pub fn execute(args: &Args, settings: &Settings) -> Result<()> {
    let name = settings.backend.build(&args.name, settings.delimiter);
    let components: Vec<ComponentInfo> = name
        .components()
        .iter()
        .zip(name.unmasked_components())
        .enumerate()
        .map(|(index, (masked, unmasked))| ComponentInfo {
            index,
            masked: masked.clone(),
            unmasked,
        })
        .collect();

    if settings.json {
        return print_json(&SplitOutput {
            delimiter: settings.delimiter.to_string(),
            no_components: name.no_components(),
            components,
        });
    }

    let mut table = create_table();
    table.set_header(vec!["Index", "Masked", "Unmasked"]);
    for component in &components {
        table.add_row(vec![
            component.index.to_string(),
            display_component(&component.masked),
            display_component(&component.unmasked),
        ]);
    }
    println!("{table}");
    Ok(())
}
