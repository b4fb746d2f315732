use std::borrow::Cow;

use crate::error::NameError;
use crate::masking::{close_trailing_escape, has_dangling_escape};
use crate::tokenizer;

use super::{contract, impl_value_traits, Delimiter, Name};

/// A name stored as a list of masked components.
///
/// # Examples
///
/// ```
/// use oxname_core::name::{Name, StringArrayName};
///
/// let name = StringArrayName::new([r"oss\.cs", "fau", "de"]);
/// assert_eq!(name.no_components(), 3);
/// assert_eq!(name.as_string(), "oss.cs.fau.de");
/// ```
#[derive(Debug, Clone)]
pub struct StringArrayName {
    delimiter: Delimiter,
    components: Vec<String>,
}

impl StringArrayName {
    /// Create a name from masked components using the default delimiter.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_parts(components.into_iter().map(Into::into).collect(), Delimiter::DEFAULT)
    }

    /// Create a name from masked components and a delimiter given as a string.
    ///
    /// # Errors
    ///
    /// `NameError::InvalidDelimiter` unless `delimiter` is exactly one character.
    pub fn with_delimiter<I, S>(components: I, delimiter: &str) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let delimiter = Delimiter::parse(delimiter)?;
        Ok(Self::from_parts(
            components.into_iter().map(Into::into).collect(),
            delimiter,
        ))
    }

    /// Create a name from already-collected masked components.
    ///
    /// A dangling escape at the end of a component is closed, as in every
    /// mutating operation.
    pub fn from_parts(components: Vec<String>, delimiter: Delimiter) -> Self {
        let components: Vec<String> = components.into_iter().map(contract::closed).collect();
        tracing::debug!(
            delimiter = %delimiter,
            components = components.len(),
            "created array-backed name"
        );
        Self {
            delimiter,
            components,
        }
    }

    /// Split a delimited string up front and store the pieces.
    pub fn parse(text: &str, delimiter: Delimiter) -> Self {
        Self::from_parts(tokenizer::split(text, delimiter.as_char()), delimiter)
    }

    /// Parse a canonical data string (default delimiter).
    pub fn from_data_string(data: &str) -> Self {
        Self::parse(data, Delimiter::DEFAULT)
    }

    /// Consume the name, returning its masked components.
    pub fn into_components(self) -> Vec<String> {
        self.components
    }
}

impl Name for StringArrayName {
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.components.len()
    }

    fn component(&self, index: usize) -> Result<String, NameError> {
        contract::check_index("component", self, index)?;
        Ok(self.components[index].clone())
    }

    fn components(&self) -> Cow<'_, [String]> {
        Cow::Borrowed(&self.components)
    }

    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        contract::check_index("set_component", &*self, index)?;
        let old_len = self.components.len();
        let component = close_trailing_escape(component);

        self.components[index] = component.to_string();

        contract::ensure_len("set_component", &*self, old_len)?;
        contract::ensure_component("set_component", &*self, index, &component)?;
        self.check_invariants()?;
        tracing::trace!(op = "set_component", index, len = old_len, "name mutated");
        Ok(())
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        contract::check_insert_index("insert", &*self, index)?;
        let old_len = self.components.len();

        self.components
            .insert(index, close_trailing_escape(component).into_owned());

        contract::ensure_len("insert", &*self, old_len + 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "insert", index, len = old_len + 1, "name mutated");
        Ok(())
    }

    fn append(&mut self, component: &str) -> Result<(), NameError> {
        let old_len = self.components.len();

        self.components
            .push(close_trailing_escape(component).into_owned());

        contract::ensure_len("append", &*self, old_len + 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "append", len = old_len + 1, "name mutated");
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        contract::check_index("remove", &*self, index)?;
        let old_len = self.components.len();

        self.components.remove(index);

        contract::ensure_len("remove", &*self, old_len - 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "remove", index, len = old_len - 1, "name mutated");
        Ok(())
    }

    fn clone_boxed(&self) -> Box<dyn Name> {
        Box::new(self.clone())
    }

    fn check_invariants(&self) -> Result<(), NameError> {
        let ch = self.delimiter.as_char();
        contract::ensure_invariant(
            "check_invariants",
            self,
            Delimiter::new(ch).is_ok(),
            "delimiter must be a single non-escape character",
        )?;
        contract::ensure_invariant(
            "check_invariants",
            self,
            !self.components.iter().any(|c| has_dangling_escape(c)),
            "stored component ends in a dangling escape",
        )
    }
}

impl_value_traits!(StringArrayName);
