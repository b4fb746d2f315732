pub mod codec;
pub mod convert;
pub mod edit;
pub mod eq;
pub mod show;
pub mod split;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use oxname_core::{Delimiter, Name, StringArrayName, StringName};

/// Which storage backend names are built with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// List of masked components
    #[default]
    Array,
    /// One delimited string plus a component counter
    String,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Array => "array",
            Backend::String => "string",
        }
    }

    /// Build a name from delimited, masked text.
    pub fn build(self, text: &str, delimiter: Delimiter) -> Box<dyn Name> {
        match self {
            Backend::Array => Box::new(StringArrayName::parse(text, delimiter)),
            Backend::String => Box::new(StringName::from_string(text.to_string(), delimiter)),
        }
    }
}
