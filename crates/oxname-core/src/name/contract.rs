//! Representation-independent checks and conversions shared by both backends.
//!
//! Preconditions are checked before any mutation and fail with an
//! InvalidArgument-tier error. Postconditions and invariants are checked after
//! a mutation and fail with an InternalInvariantViolation-tier error.

use crate::error::{NameContext, NameError};
use crate::masking::{self, DEFAULT_DELIMITER};
use crate::tokenizer;

use super::{Delimiter, Name};

pub(crate) fn context_for<N: Name + ?Sized>(op: &'static str, name: &N) -> NameContext {
    NameContext::new()
        .with_operation(op)
        .with_name(name.as_data_string())
}

/// `0 <= index < len`
pub(crate) fn check_index<N: Name + ?Sized>(
    op: &'static str,
    name: &N,
    index: usize,
) -> Result<(), NameError> {
    let len = name.no_components();
    if index < len {
        Ok(())
    } else {
        Err(NameError::IndexOutOfBounds {
            index,
            len,
            context: context_for(op, name),
        })
    }
}

/// `0 <= index <= len`
pub(crate) fn check_insert_index<N: Name + ?Sized>(
    op: &'static str,
    name: &N,
    index: usize,
) -> Result<(), NameError> {
    let len = name.no_components();
    if index <= len {
        Ok(())
    } else {
        Err(NameError::InsertOutOfBounds {
            index,
            len,
            context: context_for(op, name),
        })
    }
}

/// Postcondition: the component count after `op` is `expected`.
pub(crate) fn ensure_len<N: Name + ?Sized>(
    op: &'static str,
    name: &N,
    expected: usize,
) -> Result<(), NameError> {
    let actual = name.no_components();
    if actual == expected {
        return Ok(());
    }

    tracing::error!(op, expected, actual, "component count postcondition failed");
    Err(NameError::PostconditionFailed {
        reason: format!("expected {expected} components, found {actual}"),
        context: context_for(op, name),
    })
}

/// Postcondition: component `index` reads back as `expected` after `op`.
pub(crate) fn ensure_component<N: Name + ?Sized>(
    op: &'static str,
    name: &N,
    index: usize,
    expected: &str,
) -> Result<(), NameError> {
    let actual = name.component(index)?;
    if actual == expected {
        return Ok(());
    }

    tracing::error!(op, index, expected, %actual, "component postcondition failed");
    Err(NameError::PostconditionFailed {
        reason: format!("component {index} is {actual:?}, expected {expected:?}"),
        context: context_for(op, name),
    })
}

/// Fails with an invariant violation carrying `reason` unless `holds`.
pub(crate) fn ensure_invariant<N: Name + ?Sized>(
    op: &'static str,
    name: &N,
    holds: bool,
    reason: &str,
) -> Result<(), NameError> {
    if holds {
        return Ok(());
    }

    tracing::error!(op, reason, "class invariant violated");
    Err(NameError::InvariantViolated {
        reason: reason.to_string(),
        context: context_for(op, name),
    })
}

/// Owned counterpart of [`masking::close_trailing_escape`], used where
/// components are taken by value.
pub(crate) fn closed(mut component: String) -> String {
    if masking::has_dangling_escape(&component) {
        component.push(masking::ESCAPE_CHARACTER);
    }
    component
}

/// Unmask every component and join with `delimiter`. The new delimiter is not
/// escaped inside components.
pub(crate) fn render<S: AsRef<str>>(components: &[S], delimiter: Delimiter) -> String {
    let unmasked: Vec<String> = components
        .iter()
        .map(|c| masking::unmask(c.as_ref()))
        .collect();
    tokenizer::join(&unmasked, delimiter.as_char())
}

/// Canonical data string: components re-masked for, and joined with, the
/// default delimiter.
pub(crate) fn data_string<S: AsRef<str>>(components: &[S]) -> String {
    let remasked: Vec<String> = components
        .iter()
        .map(|c| masking::remask(c.as_ref(), DEFAULT_DELIMITER))
        .collect();
    tokenizer::join(&remasked, DEFAULT_DELIMITER)
}

/// `hash = hash * 31 + code` over the UTF-16 code units of `data`, wrapping
/// to a signed 32-bit integer, seeded with 0.
///
/// # Examples
///
/// ```
/// use oxname_core::name::hash_code;
///
/// assert_eq!(hash_code(""), 0);
/// assert_eq!(hash_code("a"), 97);
/// assert_eq!(hash_code("ab"), 97 * 31 + 98);
/// ```
pub fn hash_code(data: &str) -> i32 {
    data.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}
