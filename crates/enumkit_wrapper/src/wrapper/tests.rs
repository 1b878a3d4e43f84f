#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::KeyFilter;
use enumkit_model::{enum_model, Nullable};
use pretty_assertions::assert_eq;

fn numbers() -> EnumWrapper {
    EnumWrapper::new(Arc::new(enum_model! { A = 0, B = 1, C = 2 }.unwrap()))
}

fn colors() -> EnumWrapper {
    EnumWrapper::new(Arc::new(enum_model! { R = "r", G = "g", B = "b" }.unwrap()))
}

/// A numeric enum as a script host compiles it: reverse entries first.
fn compiled_numeric() -> Arc<EnumModel> {
    Arc::new(
        EnumModel::builder()
            .entry("0", "Low")
            .entry("1", "High")
            .entry("Low", 0)
            .entry("High", 1)
            .build()
            .unwrap(),
    )
}

/// `Primary` and `Alias` share a value; `Alias` is declared last.
fn with_duplicates() -> EnumWrapper {
    EnumWrapper::new(Arc::new(
        enum_model! { Primary = "p", Other = "o", Alias = "p" }.unwrap(),
    ))
}

#[test]
fn test_keys_values_entries() {
    let w = numbers();
    assert_eq!(w.len(), 3);
    assert!(!w.is_empty());
    assert_eq!(w.get_keys(), vec!["A", "B", "C"]);
    assert_eq!(
        w.get_values(),
        vec![EnumValue::from(0), EnumValue::from(1), EnumValue::from(2)]
    );
    assert_eq!(
        w.get_entries(),
        vec![
            ("A", EnumValue::from(0)),
            ("B", EnumValue::from(1)),
            ("C", EnumValue::from(2)),
        ]
    );
}

#[test]
fn test_returned_vectors_are_copies() {
    let w = colors();
    let mut keys = w.get_keys();
    keys.clear();
    let mut values = w.get_values();
    values.push(EnumValue::from("x"));
    let mut entries = w.get_entries();
    entries.reverse();

    assert_eq!(w.get_keys(), vec!["R", "G", "B"]);
    assert_eq!(w.get_values().len(), 3);
    assert_eq!(w.get_entries()[0], ("R", EnumValue::from("r")));
}

#[test]
fn test_numeric_reverse_entries_filtered() {
    let w = EnumWrapper::new(compiled_numeric());
    assert_eq!(w.get_keys(), vec!["Low", "High"]);
    assert_eq!(w.len(), 2);
    assert!(!w.is_key("0"));
    assert!(!w.is_value("Low"));
    assert_eq!(w.get_key(&1).unwrap(), "High");
}

#[test]
fn test_keep_all_filter_keeps_digit_keys() {
    let config = WrapperConfig::new().with_key_filter(KeyFilter::KeepAll);
    let w = EnumWrapper::with_config(compiled_numeric(), &config);
    assert_eq!(w.get_keys(), vec!["0", "1", "Low", "High"]);
    assert!(w.is_key("0"));
    assert!(w.is_value("Low"));
}

#[test]
fn test_is_key_and_as_key() {
    let w = numbers();
    assert!(w.is_key("A"));
    assert!(w.is_key(&String::from("C")));
    assert!(!w.is_key("Z"));
    assert!(!w.is_key("a"));
    assert!(!w.is_key(&None::<&str>));
    assert!(!w.is_key(&Nullable::<&str>::Null));

    assert_eq!(w.as_key("B").unwrap(), "B");
    let err = w.as_key("Z").unwrap_err();
    assert_eq!(
        err,
        WrapperError::InvalidKey {
            key: "Z".to_string(),
            expected: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        }
    );
    assert_eq!(err.to_string(), "Unexpected key: Z. Expected one of: A, B, C");
}

#[test]
fn test_as_key_undefined_reports_undefined() {
    let w = numbers();
    let err = w.as_key(&None::<&str>).unwrap_err();
    assert!(err.to_string().starts_with("Unexpected key: undefined."));
}

#[test]
fn test_as_key_or_default() {
    let w = numbers();
    assert_eq!(w.as_key_or_default("A", None), Some("A"));
    assert_eq!(w.as_key_or_default("Z", None), None);
    assert_eq!(w.as_key_or_default("Z", Some("C")), Some("C"));
    assert_eq!(w.as_key_or_default("Z", Some("fallback")), Some("fallback"));
    assert_eq!(w.as_key_or_default(&None::<&str>, None), None);
}

#[test]
fn test_is_value_and_as_value() {
    let w = colors();
    assert!(w.is_value("r"));
    assert!(!w.is_value("R"));
    assert!(!w.is_value(&None::<&str>));
    assert!(!w.is_value(&Nullable::<&str>::Undefined));

    let n = numbers();
    assert!(n.is_value(&2));
    assert!(n.is_value(&2.0));
    assert!(!n.is_value("2"));

    assert_eq!(w.as_value("g").unwrap(), EnumValue::from("g"));
    let err = w.as_value("x").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected value: x. Expected one of: r, g, b");
}

#[test]
fn test_as_value_or_default() {
    let w = numbers();
    assert_eq!(w.as_value_or_default(&1, None), Some(EnumValue::from(1)));
    assert_eq!(w.as_value_or_default(&9, None), None);
    assert_eq!(
        w.as_value_or_default(&9, Some(EnumValue::from(-1))),
        Some(EnumValue::from(-1))
    );
}

#[test]
fn test_get_key_reverse_lookup() {
    let w = numbers();
    assert_eq!(w.get_key(&1).unwrap(), "B");
    assert_eq!(w.get_key(&EnumValue::from(2)).unwrap(), "C");
    assert!(matches!(
        w.get_key(&7),
        Err(WrapperError::InvalidValue { .. })
    ));
    assert_eq!(w.get_key_or_default(&7, Some("A")), Some("A"));
    assert_eq!(w.get_key_or_default(&7, None), None);
    assert_eq!(w.get_key_or_default(&0, None), Some("A"));
}

#[test]
fn test_get_value_forward_lookup() {
    let w = colors();
    assert_eq!(w.get_value("G").unwrap(), EnumValue::from("g"));
    let err = w.get_value("g").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected key: g. Expected one of: R, G, B");
    assert_eq!(w.get_value_or_default("g", None), None);
    assert_eq!(
        w.get_value_or_default("g", Some(EnumValue::from("?"))),
        Some(EnumValue::from("?"))
    );
    assert_eq!(w.get_value_or_default("B", None), Some(EnumValue::from("b")));
}

#[test]
fn test_duplicate_values_last_key_wins() {
    let w = with_duplicates();
    assert_eq!(w.len(), 3);
    assert_eq!(w.get_values(), vec![EnumValue::from("p"), EnumValue::from("o")]);
    assert_eq!(w.get_key("p").unwrap(), "Alias");
    assert_eq!(w.get_value("Primary").unwrap(), EnumValue::from("p"));
}

#[test]
fn test_round_trip_with_duplicates() {
    let w = with_duplicates();
    for key in w.get_keys() {
        let value = w.get_value(key).unwrap();
        let back = w.get_key(&value).unwrap();
        assert_eq!(w.get_value(back).unwrap(), value);
    }
}

#[test]
fn test_index_of_key() {
    let w = colors();
    assert_eq!(w.index_of_key("R"), Some(0));
    assert_eq!(w.index_of_key("B"), Some(2));
    assert_eq!(w.index_of_key("r"), None);
}

#[test]
fn test_for_each_visits_in_order() {
    let w = numbers();
    let mut seen = Vec::new();
    w.for_each(|value, key, model| {
        assert_eq!(model.get(key), Some(value));
        seen.push(format!("{key}={value}"));
    });
    assert_eq!(seen, vec!["A=0", "B=1", "C=2"]);
}

#[test]
fn test_map_collects_in_order() {
    let w = colors();
    let labels = w.map(|value, key, _| format!("{key}:{value}"));
    assert_eq!(labels, vec!["R:r", "G:g", "B:b"]);
}

#[test]
fn test_iteration_is_restartable() {
    let w = colors();
    let first: Vec<(&str, &EnumValue)> = w.iter().collect();
    let second: Vec<(&str, &EnumValue)> = (&w).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);

    let mut iter = w.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back().map(|(k, _)| k), Some("B"));
    assert_eq!(iter.next().map(|(k, _)| k), Some("R"));

    let mut count = 0;
    for (key, _) in &w {
        assert!(w.is_key(key));
        count += 1;
    }
    assert_eq!(count, w.len());
}

#[test]
fn test_empty_model() {
    let w = EnumWrapper::new(Arc::new(EnumModel::default()));
    assert!(w.is_empty());
    assert!(w.get_keys().is_empty());
    assert!(!w.is_key("A"));
    assert_eq!(w.as_key("A").unwrap_err().to_string(), "Unexpected key: A. Expected one of: ");
}

#[test]
fn test_prototype_like_names_are_ordinary_keys() {
    let w = EnumWrapper::new(Arc::new(
        enum_model! { toString = "t", constructor = "c" }.unwrap(),
    ));
    assert!(w.is_key("toString"));
    assert!(!w.is_key("hasOwnProperty"));
    assert_eq!(w.get_key("c").unwrap(), "constructor");
}

#[test]
fn test_debug_lists_entries() {
    let w = numbers();
    assert_eq!(format!("{w:?}"), r#"{"A": Number(0), "B": Number(1), "C": Number(2)}"#);
}
