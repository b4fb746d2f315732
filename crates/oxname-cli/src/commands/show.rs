//! Show command - summarize a name: count, renderings and hash code.

use anyhow::Result;
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use crate::config::Settings;
use crate::output::{create_table, print_json};

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// Delimited name, components in masked form
    pub name: String,
}

/// JSON output format for show command
#[derive(Serialize)]
struct NameInfo {
    backend: &'static str,
    delimiter: String,
    no_components: usize,
    is_empty: bool,
    string: String,
    data_string: String,
    hash_code: i32,
}

#[instrument(level = "info", name = "cmd::show", skip_all, fields(backend = settings.backend.as_str()))]
pub fn execute(args: &Args, settings: &Settings) -> Result<()> {
    let name = settings.backend.build(&args.name, settings.delimiter);
    let info = NameInfo {
        backend: settings.backend.as_str(),
        delimiter: settings.delimiter.to_string(),
        no_components: name.no_components(),
        is_empty: name.is_empty(),
        string: name.as_string(),
        data_string: name.as_data_string(),
        hash_code: name.hash_code(),
    };

    if settings.json {
        return print_json(&info);
    }

    let mut table = create_table();
    table.set_header(vec!["Property", "Value"]);
    table.add_row(vec!["Backend", info.backend]);
    table.add_row(vec!["Delimiter", &info.delimiter]);
    table.add_row(vec!["Components", &info.no_components.to_string()]);
    table.add_row(vec!["String", &info.string]);
    table.add_row(vec!["Data String", &info.data_string]);
    table.add_row(vec!["Hash Code", &info.hash_code.to_string()]);
    println!("{table}");
    Ok(())
}
