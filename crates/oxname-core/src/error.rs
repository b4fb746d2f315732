//! Error types for name operations.
//!
//! Every failure is one of two tiers:
//! - **InvalidArgument**: the caller passed something the operation cannot
//!   accept (bad delimiter, index out of range). Raised before any mutation.
//! - **InternalInvariantViolation**: a postcondition or class invariant did not
//!   hold after an operation that passed its precondition checks. This is a
//!   defect in the implementation and is not meant to be handled by callers.

use std::fmt;
use thiserror::Error;

/// Context for name operations, providing debugging information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameContext {
    /// The operation that failed (e.g. `"insert"`)
    pub operation: Option<&'static str>,
    /// Canonical data string of the receiver at the time of failure
    pub name: Option<String>,
}

impl NameContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for NameContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if let Some(op) = self.operation {
            parts.push(format!("{op}()"));
        }

        if let Some(ref name) = self.name {
            // Long names only add noise to the message
            let display_name = if name.chars().count() > 40 {
                let head: String = name.chars().take(37).collect();
                format!("{head}...")
            } else {
                name.clone()
            };
            parts.push(format!("on name '{display_name}'"));
        }

        if parts.is_empty() {
            write!(f, "(no context)")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

/// The tier an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller-supplied bad input. Nothing was mutated.
    InvalidArgument,
    /// A postcondition or invariant failed. Indicates a bug in this crate.
    InternalInvariantViolation,
}

/// Errors that can occur while building, reading or mutating a name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    // =========================================================================
    // INPUT ERRORS - Rejected before anything is mutated
    // =========================================================================
    /// The delimiter is not exactly one character, or is the escape character.
    #[error("Invalid delimiter {delimiter:?} for {context}: {reason}")]
    InvalidDelimiter {
        delimiter: String,
        reason: &'static str,
        context: NameContext,
    },

    /// Index used for reading, replacing or removing is not in `0..len`.
    #[error("Index {index} out of bounds [0, {len}) for {context}")]
    IndexOutOfBounds {
        index: usize,
        len: usize,
        context: NameContext,
    },

    /// Index used for insertion is not in `0..=len`.
    #[error("Insert index {index} out of bounds [0, {len}] for {context}")]
    InsertOutOfBounds {
        index: usize,
        len: usize,
        context: NameContext,
    },

    // =========================================================================
    // PROGRAMMING ERRORS - Should not happen in a correct implementation
    // =========================================================================
    /// An operation completed but did not have its promised effect.
    #[error("[POSTCONDITION FAILED] {context}: {reason}")]
    PostconditionFailed { reason: String, context: NameContext },

    /// A class invariant no longer holds.
    #[error("[INVARIANT VIOLATED] {context}: {reason}")]
    InvariantViolated { reason: String, context: NameContext },
}

impl NameError {
    /// Which tier this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NameError::InvalidDelimiter { .. }
            | NameError::IndexOutOfBounds { .. }
            | NameError::InsertOutOfBounds { .. } => ErrorKind::InvalidArgument,
            NameError::PostconditionFailed { .. } | NameError::InvariantViolated { .. } => {
                ErrorKind::InternalInvariantViolation
            }
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_internal(&self) -> bool {
        self.kind() == ErrorKind::InternalInvariantViolation
    }

    /// The context attached to this error.
    pub fn context(&self) -> &NameContext {
        match self {
            NameError::InvalidDelimiter { context, .. }
            | NameError::IndexOutOfBounds { context, .. }
            | NameError::InsertOutOfBounds { context, .. }
            | NameError::PostconditionFailed { context, .. }
            | NameError::InvariantViolated { context, .. } => context,
        }
    }

    /// Add or update context on an existing error
    pub fn with_context(self, new_context: NameContext) -> Self {
        match self {
            NameError::InvalidDelimiter { delimiter, reason, .. } => NameError::InvalidDelimiter {
                delimiter,
                reason,
                context: new_context,
            },
            NameError::IndexOutOfBounds { index, len, .. } => NameError::IndexOutOfBounds {
                index,
                len,
                context: new_context,
            },
            NameError::InsertOutOfBounds { index, len, .. } => NameError::InsertOutOfBounds {
                index,
                len,
                context: new_context,
            },
            NameError::PostconditionFailed { reason, .. } => NameError::PostconditionFailed {
                reason,
                context: new_context,
            },
            NameError::InvariantViolated { reason, .. } => NameError::InvariantViolated {
                reason,
                context: new_context,
            },
        }
    }
}
