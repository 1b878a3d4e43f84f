use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_number_display_matches_host_stringification() {
    assert_eq!(EnumValue::from(1).to_string(), "1");
    assert_eq!(EnumValue::from(1.5).to_string(), "1.5");
    assert_eq!(EnumValue::from(-0.0).to_string(), "0");
    assert_eq!(EnumValue::from(f64::NAN).to_string(), "NaN");
    assert_eq!(EnumValue::from(f64::INFINITY).to_string(), "Infinity");
    assert_eq!(EnumValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
}

#[test]
fn test_str_display_is_raw() {
    assert_eq!(EnumValue::from("red").to_string(), "red");
}

#[test]
fn test_same_value_zero_equality() {
    assert_eq!(EnumValue::from(0.0), EnumValue::from(-0.0));
    assert_eq!(EnumValue::from(f64::NAN), EnumValue::from(f64::NAN));
    assert_ne!(EnumValue::from(1), EnumValue::from("1"));
    assert_eq!(EnumValue::from(2), EnumValue::from(2_i64));
}

#[test]
fn test_hash_consistent_with_eq() {
    let mut set = HashSet::new();
    set.insert(EnumValue::from(0.0));
    set.insert(EnumValue::from(-0.0));
    set.insert(EnumValue::from(f64::NAN));
    set.insert(EnumValue::from(f64::NAN));
    set.insert(EnumValue::from("0"));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_accessors() {
    let n = EnumValue::from(3);
    let s = EnumValue::str("x");
    assert_eq!(n.as_number(), Some(3.0));
    assert_eq!(n.as_str(), None);
    assert_eq!(s.as_str(), Some("x"));
    assert!(s.is_str());
    assert!(n.is_number());
}

#[test]
fn test_member_keys() {
    assert_eq!("r".member_key(), "r");
    assert_eq!(String::from("g").member_key(), "g");
    assert_eq!(7_i32.member_key(), "7");
    assert_eq!(2.5_f64.member_key(), "2.5");
    assert_eq!(EnumValue::from(4).member_key(), "4");
    assert_eq!(EnumValue::from("b").member_key(), "b");
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", EnumValue::from(1)), "Number(1)");
    assert_eq!(format!("{:?}", EnumValue::from("a")), "Str(\"a\")");
}
