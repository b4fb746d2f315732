use std::borrow::Cow;

use crate::error::NameError;
use crate::masking::{self, close_trailing_escape};
use crate::tokenizer;

use super::{contract, impl_value_traits, Delimiter, Name};

/// A name stored as one delimited string of masked components.
///
/// The component count is tracked separately and updated on every mutation;
/// the string is only tokenized when a component has to be read or rewritten
/// by position.
///
/// A dangling escape at the end of a component is closed on entry, so the
/// counter always matches what the string tokenizes to as long as components
/// are properly masked.
///
/// `""` is a name with one empty component. The only way to reach zero
/// components is to remove the last one, after which the next `append` or
/// `insert` sets the whole string to the new component.
///
/// # Examples
///
/// ```
/// use oxname_core::name::{Name, StringName};
///
/// let mut name = StringName::new("");
/// assert_eq!(name.no_components(), 1);
///
/// name.remove(0)?;
/// assert!(name.is_empty());
///
/// name.append("first")?;
/// assert_eq!(name.as_string(), "first");
/// # Ok::<(), oxname_core::NameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringName {
    delimiter: Delimiter,
    name: String,
    no_components: usize,
}

impl StringName {
    /// Create a name from a delimited string using the default delimiter.
    pub fn new(source: impl Into<String>) -> Self {
        Self::from_string(source.into(), Delimiter::DEFAULT)
    }

    /// Create a name from a delimited string and a delimiter given as a string.
    ///
    /// # Errors
    ///
    /// `NameError::InvalidDelimiter` unless `delimiter` is exactly one character.
    pub fn with_delimiter(source: impl Into<String>, delimiter: &str) -> Result<Self, NameError> {
        let delimiter = Delimiter::parse(delimiter)?;
        Ok(Self::from_string(source.into(), delimiter))
    }

    /// Create a name from a delimited string and a validated delimiter.
    pub fn from_string(source: String, delimiter: Delimiter) -> Self {
        // Only the last component can end in a dangling escape
        let source = contract::closed(source);
        // Counted once here; kept in sync incrementally afterwards
        let no_components = tokenizer::count(&source, delimiter.as_char());
        tracing::debug!(
            delimiter = %delimiter,
            components = no_components,
            "created string-backed name"
        );
        Self {
            delimiter,
            name: source,
            no_components,
        }
    }

    /// Join masked components into a string-backed name. An empty slice gives
    /// a zero-component name.
    ///
    /// The counter is taken from the joined string, so a component holding an
    /// unescaped delimiter counts as two.
    pub fn from_parts<S: AsRef<str>>(components: &[S], delimiter: Delimiter) -> Self {
        let ch = delimiter.as_char();
        let closed: Vec<_> = components
            .iter()
            .map(|c| close_trailing_escape(c.as_ref()))
            .collect();
        let name = tokenizer::join(&closed, ch);
        let no_components = if components.is_empty() {
            0
        } else {
            tokenizer::count(&name, ch)
        };

        if no_components != components.len() {
            tracing::debug!(
                given = components.len(),
                counted = no_components,
                "components contain unescaped delimiters"
            );
        }
        Self {
            delimiter,
            name,
            no_components,
        }
    }

    /// Parse a canonical data string (default delimiter).
    pub fn from_data_string(data: &str) -> Self {
        Self::new(data)
    }

    /// The raw delimited string, masked components included.
    pub fn as_raw(&self) -> &str {
        &self.name
    }

    fn split(&self) -> Vec<String> {
        if self.no_components == 0 {
            return Vec::new();
        }
        tokenizer::split(&self.name, self.delimiter.as_char())
    }

    /// Tokenize for positional access. Fails instead of handing out a vector
    /// whose length disagrees with the counter.
    fn split_checked(&self, op: &'static str) -> Result<Vec<String>, NameError> {
        let components = self.split();
        contract::ensure_invariant(
            op,
            self,
            components.len() == self.no_components,
            "component counter out of sync with the delimited string",
        )?;
        Ok(components)
    }

    fn rejoin(&mut self, components: &[String]) {
        self.name = tokenizer::join(components, self.delimiter.as_char());
    }
}

impl Name for StringName {
    fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    fn no_components(&self) -> usize {
        self.no_components
    }

    fn component(&self, index: usize) -> Result<String, NameError> {
        contract::check_index("component", self, index)?;
        let components = self.split_checked("component")?;
        components
            .into_iter()
            .nth(index)
            .ok_or_else(|| NameError::InvariantViolated {
                reason: format!("component {index} missing from the delimited string"),
                context: contract::context_for("component", self),
            })
    }

    fn components(&self) -> Cow<'_, [String]> {
        Cow::Owned(self.split())
    }

    fn set_component(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        contract::check_index("set_component", &*self, index)?;
        let old_len = self.no_components;
        let component = close_trailing_escape(component);

        let mut components = self.split_checked("set_component")?;
        let Some(slot) = components.get_mut(index) else {
            return contract::ensure_invariant(
                "set_component",
                &*self,
                false,
                "component missing from the delimited string",
            );
        };
        *slot = component.to_string();
        self.rejoin(&components);

        contract::ensure_len("set_component", &*self, old_len)?;
        contract::ensure_component("set_component", &*self, index, &component)?;
        self.check_invariants()?;
        tracing::trace!(op = "set_component", index, len = old_len, "name mutated");
        Ok(())
    }

    fn insert(&mut self, index: usize, component: &str) -> Result<(), NameError> {
        contract::check_insert_index("insert", &*self, index)?;
        let old_len = self.no_components;

        let component = close_trailing_escape(component);

        if self.is_empty() {
            self.name = component.into_owned();
        } else {
            // check_insert_index bounds `index` by the counter, split_checked
            // bounds the counter by the vector
            let mut components = self.split_checked("insert")?;
            components.insert(index, component.into_owned());
            self.rejoin(&components);
        }
        self.no_components += 1;

        contract::ensure_len("insert", &*self, old_len + 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "insert", index, len = self.no_components, "name mutated");
        Ok(())
    }

    fn append(&mut self, component: &str) -> Result<(), NameError> {
        let old_len = self.no_components;
        let component = close_trailing_escape(component);

        if self.is_empty() {
            self.name = component.into_owned();
        } else {
            self.name.push(self.delimiter.as_char());
            self.name.push_str(&component);
        }
        self.no_components += 1;

        contract::ensure_len("append", &*self, old_len + 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "append", len = self.no_components, "name mutated");
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), NameError> {
        contract::check_index("remove", &*self, index)?;
        let old_len = self.no_components;

        if old_len == 1 {
            self.name.clear();
        } else {
            let mut components = self.split_checked("remove")?;
            components.remove(index);
            self.rejoin(&components);
        }
        self.no_components -= 1;

        contract::ensure_len("remove", &*self, old_len - 1)?;
        self.check_invariants()?;
        tracing::trace!(op = "remove", index, len = self.no_components, "name mutated");
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
            !masking::has_dangling_escape(&self.name),
            "last component ends in a dangling escape",
        )?;

        let in_sync = if self.no_components == 0 {
            self.name.is_empty()
        } else {
            tokenizer::count(&self.name, ch) == self.no_components
        };
        contract::ensure_invariant(
            "check_invariants",
            self,
            in_sync,
            "component counter out of sync with the delimited string",
        )
    }
}

impl_value_traits!(StringName);
