//! Array family: shape checks, containment and conversions

use primkit_types::{Function, Value};
use primkit_utils::{
    Condition, array_has, array_has_length, array_is, array_is_empty, array_is_every, array_to,
    array_to_json, array_to_map, array_to_object, array_to_set, array_to_string,
};

use crate::common::{json, non_arrays};

#[test]
fn every_array_function_fails_closed_on_non_arrays() {
    let always = |_: &[Value]| true;
    for value in non_arrays() {
        assert!(!array_is(&value, None), "{value:?}");
        assert!(!array_is(&value, Condition::Predicate(&always)), "{value:?}");
        assert!(!array_is_empty(&value), "{value:?}");
        assert!(!array_is_every(&value, "string"), "{value:?}");
        assert!(!array_has(&value, None), "{value:?}");
        assert!(!array_has(&value, Condition::from("string")), "{value:?}");
        assert!(!array_has_length(&value, None), "{value:?}");
        assert!(!array_has_length(&value, Some(0)), "{value:?}");
        assert_eq!(array_to(&value, <[Value]>::len), None, "{value:?}");
        assert_eq!(array_to_string(&value, None), "", "{value:?}");
        assert!(array_to_set(&value).is_empty(), "{value:?}");
        assert!(array_to_map(&value, "0").is_empty(), "{value:?}");
        assert!(array_to_object(&value).is_empty(), "{value:?}");
        assert_eq!(array_to_json(&value), "", "{value:?}");
    }
}

#[test]
fn has_length_matches_len() {
    for len in 0..5 {
        let value = Value::Array(vec![Value::Null; len]);
        assert_eq!(array_has_length(&value, None), len >= 1);
        for n in 0..5 {
            assert_eq!(array_has_length(&value, Some(n)), len == n);
        }
    }
}

#[test]
fn has_type_name_and_membership() {
    assert!(array_has(&json(r#"["a","b"]"#), Condition::from("string")));
    assert!(array_has(&json("[1,2,3]"), Condition::from(2)));
    assert!(!array_has(&json("[1,2,3]"), Condition::from("2")));
    assert!(array_has(&json(r#"[1,"x",null]"#), Condition::from("object")));
    assert!(array_has(&json("[[1]]"), Condition::Value(json("[1]"))));
}

#[test]
fn whole_collection_function() {
    let sums_to_six = Function::new(1, |args| {
        let total: f64 = args[0]
            .as_array()
            .unwrap_or_default()
            .iter()
            .filter_map(Value::as_number)
            .sum();
        Value::Bool(total == 6.0)
    });
    assert!(array_is(&json("[1,2,3]"), Condition::from(sums_to_six.clone())));
    assert!(array_has(&json("[1,2,3]"), Condition::from(sums_to_six.clone())));
    assert!(!array_has(&json("[1,2]"), Condition::from(sums_to_six)));
}

#[test]
fn every_with_runtime_function() {
    let positive = Function::new(1, |args| {
        Value::Bool(args[0].as_number().is_some_and(|n| n > 0.0))
    });
    assert!(array_is_every(&json("[1,2,3]"), positive.clone()));
    assert!(!array_is_every(&json("[1,-2,3]"), positive));
}

#[test]
fn keyed_map_from_rows() {
    let rows = json(r#"[{"id":"a","x":1},{"x":2},{"id":"b","x":3},"loose",null]"#);
    let map = array_to_map(&rows, "id");
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(map["a"], json(r#"{"id":"a","x":1}"#));
}

#[test]
fn set_dedups_structurally_equal_primitives_only() {
    let values = json(r#"[1, "1", 1, true, "1"]"#);
    assert_eq!(array_to_set(&values), vec![Value::from(1), Value::from("1"), Value::Bool(true)]);
}

#[test]
fn json_and_string_rendering() {
    let mixed = json(r#"["x", 1.5, [true, null], {"k": "v"}]"#);
    insta::assert_snapshot!(array_to_json(&mixed), @r#"["x",1.5,[true,null],{"k":"v"}]"#);
    insta::assert_snapshot!(array_to_string(&mixed, " | "), @"x | 1.5 | true, | [object Object]");
}
