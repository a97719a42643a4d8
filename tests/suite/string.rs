//! String family: format checks, character classes and case transforms

use primkit_types::{Function, Value};
use primkit_utils::{
    Condition, string_has, string_has_chinese, string_has_emoji, string_has_symbol, string_is,
    string_is_email, string_is_ip, string_is_json, string_is_slug, string_is_url,
    string_is_uuid, string_to_array, string_to_camel_case, string_to_constant, string_to_slug,
    string_to_title_case, string_to_upper,
};
use regex::Regex;
use uuid::Uuid;

#[test]
fn literal_match_is_reflexive() {
    for text in ["", "a", "hello world", "ünïcödé", "with\nnewline", "😀"] {
        let value = Value::from(text);
        assert!(string_is(&value, None), "{text:?}");
        assert!(string_is(&value, Condition::from(text)), "{text:?}");
    }
}

#[test]
fn non_strings_fail_every_check() {
    let re = Regex::new(".*").unwrap();
    for value in [Value::Null, Value::from(1), Value::array(["a"]), Value::Bool(true)] {
        assert!(!string_is(&value, None));
        assert!(!string_is(&value, Condition::Pattern(&re)));
        assert!(!string_has(&value, None));
        assert!(!string_is_email(&value));
        assert!(!string_has_symbol(&value));
    }
}

#[test]
fn generated_v4_uuids_are_accepted() {
    for _ in 0..16 {
        let id = Uuid::new_v4();
        assert!(string_is_uuid(&Value::from(id.to_string())));
        assert!(string_is_uuid(&Value::from(id.to_string().to_uppercase())));
        assert!(!string_is_uuid(&Value::from(id.simple().to_string())));
    }
}

#[test]
fn nil_uuid_is_not_a_versioned_uuid() {
    assert!(!string_is_uuid(&Value::from(Uuid::nil().to_string())));
}

#[test]
fn slug_rejects_uppercase() {
    assert!(!string_is_slug(&Value::from("Hello-World")));
    assert!(string_is_slug(&Value::from(string_to_slug("Hello World"))));
}

#[test]
fn runtime_regexp_condition() {
    let value = Value::from("order-1234");
    let digits = Value::RegExp(Regex::new(r"[0-9]{4}$").unwrap());
    assert!(string_is(&value, Condition::Value(digits.clone())));
    assert!(string_has(&value, Condition::Value(digits)));
}

#[test]
fn runtime_function_condition() {
    let shouty = Function::new(1, |args| {
        let text = args[0].as_str().unwrap_or_default();
        Value::Bool(!text.is_empty() && text == text.to_uppercase())
    });
    assert!(string_is(&Value::from("LOUD"), Condition::from(shouty.clone())));
    assert!(!string_has(&Value::from("quiet"), Condition::from(shouty)));
}

#[test]
fn mixed_feature_checks() {
    assert!(string_is_url(&Value::from("https://sub.example.org/a?b=c#d")));
    assert!(string_is_ip(&Value::from("127.0.0.1")));
    assert!(string_is_json(&Value::from(r#"[{"nested": true}]"#)));
    assert!(string_has_chinese(&Value::from("价格 42")));
    assert!(string_has_emoji(&Value::from("🤖 beep")));
}

#[test]
fn upper_is_idempotent() {
    for text in ["hello", "ﬁne", "Ǳ", "ß", "mixed Case 123"] {
        let once = string_to_upper(text);
        assert_eq!(string_to_upper(&once), once, "{text:?}");
    }
}

#[test]
fn case_transform_snapshots() {
    let source = "  the quick-brown_fox jumps ";
    insta::assert_snapshot!(string_to_camel_case(source), @"theQuickBrownFoxJumps");
    insta::assert_snapshot!(string_to_slug(source), @"the-quick-brown_fox-jumps");
    insta::assert_snapshot!(string_to_constant(source), @"THE_QUICK_BROWN_FOX_JUMPS");
    assert_eq!(string_to_title_case(source), "  The Quick-Brown_Fox Jumps ");
}

#[test]
fn split_into_array() {
    assert_eq!(string_to_array("a, b", ", "), ["a", "b"]);
    assert_eq!(string_to_array("a,,b", None), ["a", "", "b"]);
    assert_eq!(string_to_array("ab", ""), ["a", "b"]);
}
