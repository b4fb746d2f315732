//! Edit command - apply a sequence of mutations to a name.
//!
//! # Examples
//!
//! ```bash
//! # oss.cs.fau.de -> www.oss.informatik.fau.de
//! oxname edit oss.cs.fau.de insert:0:www set:2:informatik
//!
//! # Components are masked for the delimiter unless --masked is given
//! oxname edit oss append:a.b        # -> oss.a\.b
//! ```

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use serde::Serialize;
use tracing::instrument;

use oxname_core::masking::mask;
use oxname_core::tokenizer::join;
use oxname_core::Name;

use crate::config::Settings;
use crate::output::print_json;

#[derive(ClapArgs, Clone)]
pub struct Args {
    /// Delimited name, components in masked form
    pub name: String,

    /// Operations, applied in order: append:C, insert:I:C, set:I:C, remove:I
    #[arg(value_name = "OP", required = true, value_parser = parse_op)]
    pub ops: Vec<EditOp>,

    /// Treat operation components as already masked
    #[arg(long)]
    pub masked: bool,
}

/// One mutation parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    Append(String),
    Insert(usize, String),
    Set(usize, String),
    Remove(usize),
}

impl EditOp {
    fn apply(&self, name: &mut dyn Name, masked: bool) -> Result<()> {
        let delimiter = name.delimiter_char();
        let prepare = |component: &str| {
            if masked {
                component.to_string()
            } else {
                mask(component, delimiter)
            }
        };

        match self {
            EditOp::Append(c) => name.append(&prepare(c)),
            EditOp::Insert(i, c) => name.insert(*i, &prepare(c)),
            EditOp::Set(i, c) => name.set_component(*i, &prepare(c)),
            EditOp::Remove(i) => name.remove(*i),
        }
        .with_context(|| format!("Failed to apply '{self}'"))
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOp::Append(c) => write!(f, "append:{c}"),
            EditOp::Insert(i, c) => write!(f, "insert:{i}:{c}"),
            EditOp::Set(i, c) => write!(f, "set:{i}:{c}"),
            EditOp::Remove(i) => write!(f, "remove:{i}"),
        }
    }
}

impl FromStr for EditOp {
    type Err = String;

    /// The component is everything after the last required `:`, so it may
    /// itself contain colons.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = s
            .split_once(':')
            .ok_or_else(|| format!("expected VERB:ARGS, got '{s}'"))?;

        let index = |text: &str| {
            text.parse::<usize>()
                .map_err(|_| format!("invalid index '{text}' in '{s}'"))
        };
        let index_and_component = |text: &str| {
            let (i, c) = text
                .split_once(':')
                .ok_or_else(|| format!("expected {verb}:INDEX:COMPONENT, got '{s}'"))?;
            Ok::<_, String>((index(i)?, c.to_string()))
        };

        match verb {
            "append" => Ok(EditOp::Append(rest.to_string())),
            "insert" => index_and_component(rest).map(|(i, c)| EditOp::Insert(i, c)),
            "set" => index_and_component(rest).map(|(i, c)| EditOp::Set(i, c)),
            "remove" => index(rest).map(EditOp::Remove),
            other => Err(format!(
                "unknown operation '{other}' (expected append, insert, set or remove)"
            )),
        }
    }
}

fn parse_op(s: &str) -> Result<EditOp, String> {
    s.parse()
}

/// JSON output format for edit command
#[derive(Serialize)]
struct EditOutput {
    name: String,
    string: String,
    data_string: String,
    no_components: usize,
}

#[instrument(level = "info", name = "cmd::edit", skip_all, fields(ops = args.ops.len()))]
pub fn execute(args: &Args, settings: &Settings) -> Result<()> {
    let mut name = settings.backend.build(&args.name, settings.delimiter);

    for op in &args.ops {
        op.apply(&mut *name, args.masked)?;
        tracing::debug!(%op, components = name.no_components(), "applied edit");
    }

    let delimited = join(&name.components(), settings.delimiter.as_char());
    if settings.json {
        return print_json(&EditOutput {
            name: delimited,
            string: name.as_string(),
            data_string: name.as_data_string(),
            no_components: name.no_components(),
        });
    }

    println!("{delimited}");
    Ok(())
}
