//! Splitting of delimited strings into masked components, and the inverse join.

use crate::masking::ESCAPE_CHARACTER;

/// Split `text` at every delimiter that is not escaped.
///
/// A delimiter is escaped iff it is preceded by an odd number of consecutive
/// escape characters. Components are returned in masked form. The empty string
/// yields exactly one empty component.
///
/// # Examples
///
/// ```
/// use oxname_core::tokenizer::split;
///
/// assert_eq!(split("oss.cs.fau.de", '.'), vec!["oss", "cs", "fau", "de"]);
/// assert_eq!(split("a..b", '.'), vec!["a", "", "b"]);
/// assert_eq!(split(r"a\.b", '.'), vec![r"a\.b"]);
/// assert_eq!(split("", '.'), vec![""]);
/// ```
pub fn split(text: &str, delimiter: char) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    // Length of the run of escape characters directly before the cursor
    let mut escape_run = 0usize;

    for ch in text.chars() {
        if ch == delimiter && escape_run % 2 == 0 {
            components.push(std::mem::take(&mut current));
            escape_run = 0;
            continue;
        }

        if ch == ESCAPE_CHARACTER {
            escape_run += 1;
        } else {
            escape_run = 0;
        }
        current.push(ch);
    }

    components.push(current);
    components
}

/// Number of components `split(text, delimiter)` would produce, without
/// allocating them.
pub fn count(text: &str, delimiter: char) -> usize {
    let mut n = 1;
    let mut escape_run = 0usize;

    for ch in text.chars() {
        if ch == delimiter && escape_run % 2 == 0 {
            n += 1;
            escape_run = 0;
        } else if ch == ESCAPE_CHARACTER {
            escape_run += 1;
        } else {
            escape_run = 0;
        }
    }

    n
}

/// Join masked components with `delimiter`.
///
/// Joining an empty slice gives `""`. Callers that track a zero-component
/// state must handle it themselves, since `""` reads back as one component.
pub fn join<S: AsRef<str>>(components: &[S], delimiter: char) -> String {
    let mut result = String::new();

    for (i, component) in components.iter().enumerate() {
        if i > 0 {
            result.push(delimiter);
        }
        result.push_str(component.as_ref());
    }

    result
}
