//! Escaping of single name components.
//!
//! A component may contain the delimiter or the escape character only in
//! masked form: each such character is preceded by [`ESCAPE_CHARACTER`].

use std::borrow::Cow;

/// Delimiter used when none is given, and by the canonical data string.
pub const DEFAULT_DELIMITER: char = '.';

/// Marks the following character as literal. Not configurable.
pub const ESCAPE_CHARACTER: char = '\\';

/// Escape every occurrence of `delimiter` and of the escape character.
///
/// # Examples
///
/// ```
/// use oxname_core::masking::mask;
///
/// assert_eq!(mask("oss.cs", '.'), r"oss\.cs");
/// assert_eq!(mask(r"a\b", '#'), r"a\\b");
/// ```
pub fn mask(raw: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(raw.len() * 2);

    for ch in raw.chars() {
        if ch == delimiter || ch == ESCAPE_CHARACTER {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(ch);
    }

    result
}

/// Remove escape characters, keeping the character each one protects.
///
/// An escape character with nothing after it is kept literally.
///
/// # Examples
///
/// ```
/// use oxname_core::masking::unmask;
///
/// assert_eq!(unmask(r"oss\.cs"), "oss.cs");
/// assert_eq!(unmask(r"trailing\"), r"trailing\");
/// ```
pub fn unmask(masked: &str) -> String {
    let mut result = String::with_capacity(masked.len());
    let mut chars = masked.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some(escaped) => result.push(escaped),
                None => result.push(ch),
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Re-mask a component from one delimiter to another.
///
/// Equivalent to `mask(&unmask(masked), to)`.
pub fn remask(masked: &str, to: char) -> String {
    mask(&unmask(masked), to)
}

/// Whether `component` ends in an odd run of escape characters, leaving the
/// last one with nothing to protect.
pub fn has_dangling_escape(component: &str) -> bool {
    let run = component
        .chars()
        .rev()
        .take_while(|&ch| ch == ESCAPE_CHARACTER)
        .count();
    run % 2 == 1
}

/// Escape a dangling escape character at the end of `component`.
///
/// [`unmask`] keeps a trailing lone escape literally, so the result has the
/// same unmasked text. Once closed, the escape can no longer swallow a
/// delimiter placed after the component.
///
/// # Examples
///
/// ```
/// use oxname_core::masking::{close_trailing_escape, unmask};
///
/// assert_eq!(close_trailing_escape(r"a\"), r"a\\");
/// assert_eq!(close_trailing_escape(r"a\\"), r"a\\");
/// assert_eq!(unmask(&close_trailing_escape(r"a\")), unmask(r"a\"));
/// ```
pub fn close_trailing_escape(component: &str) -> Cow<'_, str> {
    if has_dangling_escape(component) {
        let mut closed = String::with_capacity(component.len() + 1);
        closed.push_str(component);
        closed.push(ESCAPE_CHARACTER);
        Cow::Owned(closed)
    } else {
        Cow::Borrowed(component)
    }
}

/// Check that `component` is a well-formed masked component for `delimiter`:
/// no unescaped delimiter and no dangling escape character at the end.
///
/// Components are accepted as opaque text by every mutating operation; this is
/// a query for callers that want to validate input themselves.
pub fn is_properly_masked(component: &str, delimiter: char) -> bool {
    let mut chars = component.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            if chars.next().is_none() {
                return false;
            }
        } else if ch == delimiter {
            return false;
        }
    }

    true
}
