//! Shared helpers for oxname-core integration tests.

use oxname_core::masking::mask;
use oxname_core::{Delimiter, Name, NameError, StringArrayName, StringName};

/// Install a test-writer subscriber once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oxname_core=warn".into()),
        )
        .with_test_writer()
        .try_init();
}

/// Build the same name in both backends from raw (unmasked) components.
#[allow(dead_code)]
pub fn both_from_raw(raw: &[&str], delimiter: char) -> (StringArrayName, StringName) {
    let delimiter = Delimiter::new(delimiter).unwrap();
    let masked: Vec<String> = raw.iter().map(|c| mask(c, delimiter.as_char())).collect();
    (
        StringArrayName::from_parts(masked.clone(), delimiter),
        StringName::from_parts(&masked, delimiter),
    )
}

/// Build the same name in both backends from components taken as already
/// masked, dangling escapes included.
#[allow(dead_code)]
pub fn both_from_masked(masked: &[&str], delimiter: char) -> (StringArrayName, StringName) {
    let delimiter = Delimiter::new(delimiter).unwrap();
    let owned: Vec<String> = masked.iter().map(ToString::to_string).collect();
    (
        StringArrayName::from_parts(owned, delimiter),
        StringName::from_parts(masked, delimiter),
    )
}

/// One mutation applied to a name, with a raw component where one is needed.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Op {
    Append(String),
    Insert(usize, String),
    Set(usize, String),
    Remove(usize),
}

impl Op {
    /// Apply this op to `name`, masking the component for the name's delimiter.
    #[allow(dead_code)]
    pub fn apply(&self, name: &mut dyn Name) -> Result<(), NameError> {
        let d = name.delimiter_char();
        match self {
            Op::Append(c) => name.append(&mask(c, d)),
            Op::Insert(i, c) => name.insert(*i, &mask(c, d)),
            Op::Set(i, c) => name.set_component(*i, &mask(c, d)),
            Op::Remove(i) => name.remove(*i),
        }
    }
}

/// Assert the observable behavior of two names is identical.
#[allow(dead_code)]
pub fn assert_same_observable(a: &dyn Name, s: &dyn Name) {
    assert_eq!(a.no_components(), s.no_components(), "component count differs");
    assert_eq!(a.is_empty(), s.is_empty(), "is_empty differs");
    assert_eq!(a.as_string(), s.as_string(), "as_string differs");
    assert_eq!(a.as_data_string(), s.as_data_string(), "as_data_string differs");
    assert_eq!(a.hash_code(), s.hash_code(), "hash_code differs");
    assert!(a.is_equal(s), "a should equal s");
    assert!(s.is_equal(a), "s should equal a");
    for i in 0..a.no_components() {
        assert_eq!(a.component(i).unwrap(), s.component(i).unwrap(), "component {i} differs");
    }
}
