//! Hierarchical names: ordered, masked components joined by a delimiter.
//!
//! Two storage backends implement the same [`Name`] contract:
//! - [`StringArrayName`]: a list of masked components
//! - [`StringName`]: one delimited string plus a component counter
//!
//! Given the same sequence of operations, both produce the same `as_string`,
//! `as_data_string`, `is_equal` and `hash_code` results at every step.
//!
//! # Examples
//!
//! ```
//! use oxname_core::name::{Name, StringArrayName, StringName};
//!
//! let mut a = StringArrayName::new(["oss", "cs"]);
//! let mut s = StringName::new("oss.cs");
//!
//! a.append("fau")?;
//! s.append("fau")?;
//!
//! assert_eq!(a.as_string(), "oss.cs.fau");
//! assert!(a.is_equal(&s));
//! assert_eq!(a.hash_code(), s.hash_code());
//! # Ok::<(), oxname_core::NameError>(())
//! ```

mod array;
mod contract;
mod string;

pub use array::StringArrayName;
pub use contract::hash_code;
pub use string::StringName;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{NameContext, NameError};
use crate::masking::{self, DEFAULT_DELIMITER, ESCAPE_CHARACTER};

/// A validated delimiter: exactly one character, never the escape character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiter(char);

impl Delimiter {
    /// The default delimiter, `.`.
    pub const DEFAULT: Delimiter = Delimiter(DEFAULT_DELIMITER);

    /// Create a delimiter from a single character.
    ///
    /// # Errors
    ///
    /// Returns `NameError::InvalidDelimiter` if `ch` is the escape character.
    pub fn new(ch: char) -> Result<Self, NameError> {
        if ch == ESCAPE_CHARACTER {
            return Err(NameError::InvalidDelimiter {
                delimiter: ch.to_string(),
                reason: "must not be the escape character",
                context: NameContext::new(),
            });
        }
        Ok(Delimiter(ch))
    }

    /// Parse a delimiter from a string that must hold exactly one character.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxname_core::name::Delimiter;
    ///
    /// assert_eq!(Delimiter::parse("#").unwrap().as_char(), '#');
    /// assert!(Delimiter::parse("").is_err());
    /// assert!(Delimiter::parse("::").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, NameError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Delimiter::new(ch),
            _ => Err(NameError::InvalidDelimiter {
                delimiter: s.to_string(),
                reason: "must be exactly one character",
                context: NameContext::new(),
            }),
        }
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::DEFAULT
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Delimiter {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Delimiter::parse(s)
    }
}

impl TryFrom<char> for Delimiter {
    type Error = NameError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Delimiter::new(ch)
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = NameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Delimiter::parse(s)
    }
}

/// The operation set every name backend provides.
///
/// Components passed in and handed out are in masked form. Index-based
/// operations validate their index before touching storage; mutations check
/// their postconditions and the backend's invariants afterwards.
pub trait Name: fmt::Debug {
    /// The delimiter of this name.
    fn delimiter(&self) -> Delimiter;

    /// Number of components. An empty string name has one component; zero is
    /// reached only through `remove`.
    fn no_components(&self) -> usize;

    /// Masked component at `index`.
    ///
    /// # Errors
    ///
    /// `NameError::IndexOutOfBounds` unless `index < no_components()`.
    fn component(&self, index: usize) -> Result<String, NameError>;

    /// All masked components, in order.
    fn components(&self) -> Cow<'_, [String]>;

    /// Replace the component at `index`.
    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError>;

    /// Insert a component before `index`. `index == no_components()` appends.
    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError>;

    /// Add a component at the end.
    fn append(&mut self, component: &str) -> Result<(), NameError>;

    /// Remove the component at `index`.
    fn remove(&mut self, index: usize) -> Result<(), NameError>;

    /// Independent copy of the same backend, usable through `dyn Name`.
    fn clone_boxed(&self) -> Box<dyn Name>;

    /// Check the backend's class invariants.
    fn check_invariants(&self) -> Result<(), NameError>;

    /// The delimiter character (`getDelimiterCharacter`).
    fn delimiter_char(&self) -> char {
        self.delimiter().as_char()
    }

    /// Components unmasked and joined with this name's delimiter.
    fn as_string(&self) -> String {
        contract::render(&self.components(), self.delimiter())
    }

    /// Components unmasked and joined with `delimiter`.
    ///
    /// The new delimiter is not escaped inside components, so the result is
    /// meant for display, not for parsing back.
    ///
    /// # Errors
    ///
    /// `NameError::InvalidDelimiter` unless `delimiter` is one character.
    fn as_string_with(&self, delimiter: &str) -> Result<String, NameError> {
        let delimiter = Delimiter::parse(delimiter)
            .map_err(|e| e.with_context(contract::context_for("as_string", self)))?;
        Ok(contract::render(&self.components(), delimiter))
    }

    /// Canonical form: every component unmasked, re-masked for the default
    /// delimiter and joined with it. Independent of this name's delimiter.
    fn as_data_string(&self) -> String {
        contract::data_string(&self.components())
    }

    /// All components in unmasked form.
    fn unmasked_components(&self) -> Vec<String> {
        self.components()
            .iter()
            .map(|c| masking::unmask(c))
            .collect()
    }

    /// Same component count, same delimiter and pairwise-equal masked components.
    fn is_equal(&self, other: &dyn Name) -> bool {
        self.no_components() == other.no_components()
            && self.delimiter() == other.delimiter()
            && self.components() == other.components()
    }

    /// 32-bit string hash of [`as_data_string`](Name::as_data_string).
    fn hash_code(&self) -> i32 {
        hash_code(&self.as_data_string())
    }

    /// True iff there are no components.
    fn is_empty(&self) -> bool {
        self.no_components() == 0
    }

    /// Append every masked component of `other`, in order. `other`'s delimiter
    /// is not adopted.
    fn concat(&mut self, other: &dyn Name) -> Result<(), NameError> {
        let old_len = self.no_components();
        let added = other.components();

        for component in added.iter() {
            self.append(component)?;
        }

        contract::ensure_len("concat", &*self, old_len + added.len())?;
        self.check_invariants()
    }
}

impl Clone for Box<dyn Name> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

/// Display, equality, hashing, parsing and serde for a backend, all routed
/// through the [`Name`] contract.
macro_rules! impl_value_traits {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.as_data_string())
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.is_equal(other)
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.hash_code(), state);
            }
        }

        impl std::str::FromStr for $ty {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(<$ty>::from_data_string(s))
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.as_data_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let data = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<$ty>::from_data_string(&data))
            }
        }
    };
}

pub(crate) use impl_value_traits;

impl PartialEq<StringName> for StringArrayName {
    fn eq(&self, other: &StringName) -> bool {
        self.is_equal(other)
    }
}

impl PartialEq<StringArrayName> for StringName {
    fn eq(&self, other: &StringArrayName) -> bool {
        self.is_equal(other)
    }
}

impl From<&StringName> for StringArrayName {
    fn from(name: &StringName) -> Self {
        StringArrayName::from_parts(name.components().into_owned(), name.delimiter())
    }
}

impl From<&StringArrayName> for StringName {
    fn from(name: &StringArrayName) -> Self {
        StringName::from_parts(&name.components(), name.delimiter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_parse() {
        assert_eq!(Delimiter::parse(".").unwrap(), Delimiter::DEFAULT);
        assert_eq!(Delimiter::parse("/").unwrap().as_char(), '/');
        assert_eq!(Delimiter::parse("\u{00E9}").unwrap().as_char(), '\u{00E9}');
    }

    #[test]
    fn test_delimiter_rejects_wrong_length() {
        for bad in ["", "ab", "::"] {
            let err = Delimiter::parse(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_delimiter_rejects_escape_character() {
        let err = Delimiter::new('\\').unwrap_err();
        assert!(matches!(err, NameError::InvalidDelimiter { .. }));
        assert!(Delimiter::parse("\\").is_err());
    }

    #[test]
    fn test_delimiter_default_and_display() {
        assert_eq!(Delimiter::default().as_char(), '.');
        assert_eq!(Delimiter::parse("#").unwrap().to_string(), "#");
        let d: Delimiter = "/".parse().unwrap();
        assert_eq!(d, Delimiter::try_from('/').unwrap());
    }

    #[test]
    fn test_boxed_names_clone_independently() {
        let original: Box<dyn Name> = Box::new(StringName::new("oss.cs"));
        let mut copy = original.clone();
        copy.append("fau").unwrap();

        assert_eq!(original.no_components(), 2);
        assert_eq!(copy.no_components(), 3);
    }

    #[test]
    fn test_backend_conversions_preserve_content() {
        let s = StringName::with_delimiter(r"a\#b#c", "#").unwrap();
        let a = StringArrayName::from(&s);
        assert_eq!(a.delimiter_char(), '#');
        assert_eq!(a.components().as_ref(), [r"a\#b", "c"]);
        assert_eq!(a, s);

        let back = StringName::from(&a);
        assert_eq!(back, s);
        assert_eq!(back.no_components(), 2);
    }

    #[test]
    fn test_conversion_of_zero_component_name() {
        let mut s = StringName::new("");
        s.remove(0).unwrap();
        let a = StringArrayName::from(&s);
        assert!(a.is_empty());
        let back = StringName::from(&a);
        assert!(back.is_empty());
    }

    #[test]
    fn test_conversion_of_trailing_escape_component() {
        let a = StringArrayName::new([r"a\", "b"]);
        let s = StringName::from(&a);

        assert!(s.check_invariants().is_ok());
        assert_eq!(s.no_components(), 2);
        assert_eq!(s.component(1).unwrap(), "b");
        assert_eq!(s, a);
        assert_eq!(StringArrayName::from(&s), a);
    }
}
