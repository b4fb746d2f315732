//! Hierarchical, escape-aware names.
//!
//! A name is an ordered sequence of string components separated by a single
//! delimiter character (default `.`). A component may contain the delimiter or
//! the escape character `\` only in masked form, i.e. preceded by `\`.
//!
//! - [`masking`]: escape and unescape one component
//! - [`tokenizer`]: split a delimited string into masked components, and join
//! - [`name`]: the [`Name`] contract and its two storage backends
//!
//! # Examples
//!
//! ```
//! use oxname_core::{Name, StringName};
//!
//! let mut name = StringName::new("oss.cs.fau.de");
//! name.set_component(1, "informatik")?;
//! assert_eq!(name.as_string(), "oss.informatik.fau.de");
//!
//! let hashed = StringName::with_delimiter("oss#informatik#fau#de", "#")?;
//! assert_eq!(hashed.as_data_string(), name.as_data_string());
//! # Ok::<(), oxname_core::NameError>(())
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod masking;
pub mod name;
pub mod tokenizer;

pub use error::{ErrorKind, NameContext, NameError};
pub use masking::{DEFAULT_DELIMITER, ESCAPE_CHARACTER};
pub use name::{Delimiter, Name, StringArrayName, StringName};
