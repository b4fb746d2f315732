//! Eq command - compare two names for equality.

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use oxname_core::Delimiter;

use crate::config::Settings;
use crate::output::{create_table, print_json};

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// First delimited name
    pub left: String,

    /// Second delimited name
    pub right: String,

    /// Build the second name with this delimiter instead of the global one
    #[arg(long, value_name = "DELIM")]
    pub right_delimiter: Option<String>,
}

#[derive(Serialize)]
struct EqOutput {
    equal: bool,
    left: Side,
    right: Side,
}

#[derive(Serialize)]
struct Side {
    data_string: String,
    hash_code: i32,
}

#[instrument(level = "info", name = "cmd::eq", skip_all)]
pub fn execute(args: &Args, settings: &Settings) -> Result<()> {
    let right_delimiter = match args.right_delimiter.as_deref() {
        Some(d) => Delimiter::parse(d).context("Invalid --right-delimiter")?,
        None => settings.delimiter,
    };

    let left = settings.backend.build(&args.left, settings.delimiter);
    let right = settings.backend.build(&args.right, right_delimiter);
    let equal = left.is_equal(&*right);
    tracing::debug!(equal, "compared names");

    let output = EqOutput {
        equal,
        left: Side {
            data_string: left.as_data_string(),
            hash_code: left.hash_code(),
        },
        right: Side {
            data_string: right.as_data_string(),
            hash_code: right.hash_code(),
        },
    };

    if settings.json {
        return print_json(&output);
    }

    let mut table = create_table();
    table.set_header(vec!["", "Data String", "Hash Code"]);
    table.add_row(vec![
        "Left".to_string(),
        output.left.data_string,
        output.left.hash_code.to_string(),
    ]);
    table.add_row(vec![
        "Right".to_string(),
        output.right.data_string,
        output.right.hash_code.to_string(),
    ]);
    println!("{table}");
    println!("{}", if equal { "equal" } else { "not equal" });
    Ok(())
}
