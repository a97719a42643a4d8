//! Runtime type guards

use chrono::Utc;
use primkit_types::{
    ErrorValue, Function, Handle, Symbol, Value, guard_by_name, is_array, is_array_buffer,
    is_bigint, is_boolean, is_data_view, is_date, is_error, is_function, is_map, is_null,
    is_number, is_plain_object, is_promise, is_regexp, is_set, is_string, is_symbol,
    is_uint8_array, is_undefined, is_weak_map, is_weak_set,
};
use regex::Regex;

fn samples() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("undefined", Value::Undefined),
        ("string", Value::from("s")),
        ("number", Value::Number(f64::NAN)),
        ("boolean", Value::Bool(false)),
        ("symbol", Value::Symbol(Symbol::new(Some("tag")))),
        ("bigint", Value::BigInt(1)),
        ("function", Value::Function(Function::new(0, |_| Value::Undefined))),
        ("plain-object", Value::object([("a", Value::from(1))])),
        ("array", Value::array([1])),
        ("date", Value::Date(Utc::now())),
        ("regexp", Value::RegExp(Regex::new("x").unwrap())),
        ("map", Value::Map(Vec::new())),
        ("set", Value::Set(Vec::new())),
        ("weak-map", Value::WeakMap(Handle::new())),
        ("weak-set", Value::WeakSet(Handle::new())),
        ("error", Value::Error(ErrorValue::new("boom"))),
        ("promise", Value::Promise(Handle::new())),
        ("array-buffer", Value::ArrayBuffer(vec![0; 4])),
        ("data-view", Value::DataView(vec![0; 4])),
        ("uint8-array", Value::Uint8Array(vec![1, 2])),
    ]
}

#[test]
fn each_kind_matches_only_its_own_guard() {
    let samples = samples();
    for (guard_name, _) in &samples {
        let guard = guard_by_name(guard_name).unwrap();
        for (kind, value) in &samples {
            assert_eq!(
                guard(value),
                guard_name == kind,
                "guard {guard_name} on {kind}"
            );
        }
    }
}

#[test]
fn named_guards_agree_with_functions() {
    let checks: [(&str, fn(&Value) -> bool); 21] = [
        ("null", is_null),
        ("undefined", is_undefined),
        ("string", is_string),
        ("number", is_number),
        ("boolean", is_boolean),
        ("symbol", is_symbol),
        ("bigint", is_bigint),
        ("function", is_function),
        ("plain-object", is_plain_object),
        ("array", is_array),
        ("date", is_date),
        ("regexp", is_regexp),
        ("map", is_map),
        ("set", is_set),
        ("weak-map", is_weak_map),
        ("weak-set", is_weak_set),
        ("error", is_error),
        ("promise", is_promise),
        ("array-buffer", is_array_buffer),
        ("data-view", is_data_view),
        ("uint8-array", is_uint8_array),
    ];
    for (name, value) in samples() {
        for (check_name, check) in &checks {
            let named = guard_by_name(check_name).unwrap();
            assert_eq!(named(&value), check(&value), "{check_name} on {name}");
        }
    }
    assert!(guard_by_name("no-such-kind").is_none());
}

#[cfg(feature = "node")]
#[test]
fn buffers_are_uint8_arrays() {
    use primkit_types::is_buffer;

    let buffer = Value::Buffer(b"hi".to_vec());
    assert!(is_buffer(&buffer));
    assert!(is_uint8_array(&buffer));
    assert!(!is_buffer(&Value::Uint8Array(b"hi".to_vec())));
}

#[cfg(feature = "web")]
#[test]
fn files_are_blobs() {
    use primkit_types::{Blob, File, is_blob, is_file, is_form_data, is_url_search_params};

    let blob = Blob {
        bytes: b"data".to_vec(),
        mime_type: "text/plain".to_string(),
    };
    let file = Value::File(File {
        name: "a.txt".to_string(),
        blob: blob.clone(),
    });
    assert!(is_file(&file));
    assert!(is_blob(&file));
    assert!(is_blob(&Value::Blob(blob)));
    assert!(!is_file(&Value::Blob(Blob::default())));
    assert!(is_form_data(&Value::FormData(vec![("k".to_string(), Value::from("v"))])));
    assert!(is_url_search_params(&Value::UrlSearchParams(Vec::new())));
}
