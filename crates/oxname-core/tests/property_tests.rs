//! Property-based tests for the codec, the tokenizer and the `Name` contract.

mod common;

use common::{Op, assert_same_observable, both_from_masked, both_from_raw};
use oxname_core::masking::{is_properly_masked, mask, unmask};
use oxname_core::tokenizer::{count, join, split};
use oxname_core::{Delimiter, Name, StringArrayName, StringName};
use proptest::prelude::*;

/// Raw component text biased toward the characters that need masking.
fn raw_component() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => prop::char::range('a', 'e'),
            2 => Just('.'),
            2 => Just('\\'),
            1 => Just('#'),
            1 => Just('/'),
            1 => any::<char>(),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Masked component for `d`, half of the time followed by an odd run of
/// escapes so the last one dangles.
fn masked_component(d: char) -> impl Strategy<Value = String> {
    (raw_component(), prop_oneof![Just(0usize), 1usize..4]).prop_map(move |(raw, tail)| {
        let mut masked = mask(&raw, d);
        if tail > 0 {
            masked.push_str(&"\\".repeat(2 * tail - 1));
        }
        masked
    })
}

fn delimiter() -> impl Strategy<Value = char> {
    prop_oneof![Just('.'), Just('#'), Just('/'), Just(':')]
}

/// Empty, or two or more characters.
fn bad_delimiter() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z#./]{2,4}"]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        raw_component().prop_map(Op::Append),
        (0usize..6, raw_component()).prop_map(|(i, c)| Op::Insert(i, c)),
        (0usize..6, raw_component()).prop_map(|(i, c)| Op::Set(i, c)),
        (0usize..6).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ==================== Codec ====================

    #[test]
    fn test_unmask_inverts_mask(raw in ".*", d in any::<char>()) {
        prop_assert_eq!(unmask(&mask(&raw, d)), raw);
    }

    #[test]
    fn test_mask_output_is_properly_masked(raw in raw_component(), d in delimiter()) {
        prop_assert!(is_properly_masked(&mask(&raw, d), d));
    }

    // ==================== Tokenizer ====================

    #[test]
    fn test_split_inverts_join_of_masked(raws in prop::collection::vec(raw_component(), 1..6), d in delimiter()) {
        let masked: Vec<String> = raws.iter().map(|r| mask(r, d)).collect();
        let joined = join(&masked, d);
        prop_assert_eq!(split(&joined, d), masked);
    }

    #[test]
    fn test_join_inverts_split(text in "[a-c.#\\\\]{0,16}", d in delimiter()) {
        prop_assert_eq!(join(&split(&text, d), d), text);
    }

    #[test]
    fn test_count_agrees_with_split(text in "[a-c.#\\\\]{0,16}", d in delimiter()) {
        prop_assert_eq!(count(&text, d), split(&text, d).len());
    }

    // ==================== Name contract ====================

    #[test]
    fn test_is_equal_reflexive_and_symmetric(
        raws_a in prop::collection::vec(raw_component(), 0..5),
        raws_b in prop::collection::vec(raw_component(), 0..5),
        d in delimiter(),
    ) {
        let refs_a: Vec<&str> = raws_a.iter().map(String::as_str).collect();
        let refs_b: Vec<&str> = raws_b.iter().map(String::as_str).collect();
        let (a, s) = both_from_raw(&refs_a, d);
        let (b, _) = both_from_raw(&refs_b, d);

        prop_assert!(a.is_equal(&a));
        prop_assert!(s.is_equal(&s));
        prop_assert_eq!(a.is_equal(&b), b.is_equal(&a));
        prop_assert_eq!(s.is_equal(&b), b.is_equal(&s));
        if a.is_equal(&b) {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }

    #[test]
    fn test_backends_agree_under_any_script(
        raws in prop::collection::vec(raw_component(), 0..4),
        d in delimiter(),
        script in prop::collection::vec(op(), 0..12),
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (mut a, mut s) = both_from_raw(&refs, d);

        for op in &script {
            let ra = op.apply(&mut a);
            let rs = op.apply(&mut s);
            prop_assert_eq!(ra.is_ok(), rs.is_ok());
            if let Err(e) = ra {
                prop_assert!(e.is_invalid_argument());
            }
            assert_same_observable(&a, &s);
        }
    }

    #[test]
    fn test_mutations_change_count_by_exactly_one(
        raws in prop::collection::vec(raw_component(), 0..5),
        extra in raw_component(),
        index in 0usize..6,
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (mut a, mut s) = both_from_raw(&refs, '.');
        let before = a.no_components();
        let component = mask(&extra, '.');

        a.append(&component).unwrap();
        s.append(&component).unwrap();
        prop_assert_eq!(a.no_components(), before + 1);
        prop_assert_eq!(s.no_components(), before + 1);

        if index <= a.no_components() {
            a.insert(index, &component).unwrap();
            s.insert(index, &component).unwrap();
            prop_assert_eq!(a.no_components(), before + 2);
            prop_assert_eq!(s.no_components(), before + 2);
        }

        let len = a.no_components();
        let target = index.min(len - 1);
        a.remove(target).unwrap();
        s.remove(target).unwrap();
        prop_assert_eq!(a.no_components(), len - 1);
        prop_assert_eq!(s.no_components(), len - 1);
    }

    #[test]
    fn test_insert_at_end_equals_append(
        raws in prop::collection::vec(raw_component(), 0..5),
        extra in raw_component(),
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (mut appended, mut s_appended) = both_from_raw(&refs, '.');
        let (mut inserted, mut s_inserted) = both_from_raw(&refs, '.');
        let component = mask(&extra, '.');

        appended.append(&component).unwrap();
        let end = inserted.no_components();
        inserted.insert(end, &component).unwrap();
        prop_assert!(appended.is_equal(&inserted));

        s_appended.append(&component).unwrap();
        let end = s_inserted.no_components();
        s_inserted.insert(end, &component).unwrap();
        prop_assert!(s_appended.is_equal(&s_inserted));
        prop_assert_eq!(s_appended.as_raw(), s_inserted.as_raw());
    }

    #[test]
    fn test_concat_adds_other_count(
        left in prop::collection::vec(raw_component(), 0..4),
        right in prop::collection::vec(raw_component(), 0..4),
    ) {
        let left: Vec<&str> = left.iter().map(String::as_str).collect();
        let right: Vec<&str> = right.iter().map(String::as_str).collect();
        let (mut a, mut s) = both_from_raw(&left, '.');
        let (other_a, other_s) = both_from_raw(&right, '.');
        let before = a.no_components();

        a.concat(&other_s).unwrap();
        s.concat(&other_a).unwrap();

        prop_assert_eq!(a.no_components(), before + other_a.no_components());
        prop_assert_eq!(s.no_components(), before + other_s.no_components());
        assert_same_observable(&a, &s);
    }

    #[test]
    fn test_clone_is_independent(
        raws in prop::collection::vec(raw_component(), 1..5),
        extra in raw_component(),
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (a, s) = both_from_raw(&refs, '#');
        let snapshot = (a.as_data_string(), s.as_data_string());

        let mut ca = a.clone();
        let mut cs = s.clone();
        ca.append(&mask(&extra, '#')).unwrap();
        cs.remove(0).unwrap();

        prop_assert_eq!(a.as_data_string(), snapshot.0);
        prop_assert_eq!(s.as_data_string(), snapshot.1);
        prop_assert_eq!(a.no_components(), raws.len());
        prop_assert_eq!(s.no_components(), raws.len());
    }

    #[test]
    fn test_data_string_round_trip(
        raws in prop::collection::vec(raw_component(), 1..5),
        d in delimiter(),
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (a, _) = both_from_raw(&refs, d);
        let parsed = StringName::from_data_string(&a.as_data_string());

        prop_assert_eq!(parsed.delimiter(), Delimiter::DEFAULT);
        prop_assert_eq!(parsed.unmasked_components(), raws);
    }

    #[test]
    fn test_data_string_ignores_instance_delimiter(
        raws in prop::collection::vec(raw_component(), 0..5),
        d1 in delimiter(),
        d2 in delimiter(),
    ) {
        let refs: Vec<&str> = raws.iter().map(String::as_str).collect();
        let (a1, s1) = both_from_raw(&refs, d1);
        let (a2, s2) = both_from_raw(&refs, d2);

        prop_assert_eq!(a1.as_data_string(), a2.as_data_string());
        prop_assert_eq!(s1.as_data_string(), s2.as_data_string());
        prop_assert_eq!(a1.hash_code(), s2.hash_code());
    }

    #[test]
    fn test_trailing_escapes_keep_backends_in_step(
        (d, parts, extra, index) in delimiter().prop_flat_map(|d| (
            Just(d),
            prop::collection::vec(masked_component(d), 0..5),
            masked_component(d),
            0usize..6,
        )),
    ) {
        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        let (mut a, mut s) = both_from_masked(&refs, d);

        prop_assert!(a.check_invariants().is_ok());
        prop_assert!(s.check_invariants().is_ok());
        prop_assert_eq!(s.no_components(), parts.len());
        assert_same_observable(&a, &s);
        let unmasked: Vec<String> = parts.iter().map(|p| unmask(p)).collect();
        prop_assert_eq!(s.unmasked_components(), unmasked);

        assert_same_observable(&a, &StringName::from(&a));
        assert_same_observable(&StringArrayName::from(&s), &s);

        a.append(&extra).unwrap();
        s.append(&extra).unwrap();
        assert_same_observable(&a, &s);

        let at = index.min(a.no_components());
        a.insert(at, &extra).unwrap();
        s.insert(at, &extra).unwrap();
        assert_same_observable(&a, &s);
        prop_assert_eq!(s.no_components(), parts.len() + 2);
        prop_assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn test_bad_delimiters_are_rejected(text in "[a-z.]{0,8}", bad in bad_delimiter()) {
        prop_assert!(StringName::with_delimiter(text.clone(), &bad).unwrap_err().is_invalid_argument());
        prop_assert!(StringArrayName::with_delimiter([text.clone()], &bad).unwrap_err().is_invalid_argument());
        prop_assert!(StringName::new(text).as_string_with(&bad).unwrap_err().is_invalid_argument());
    }
}
