//! Runtime type guards.
//!
//! Each guard answers "is this value exactly this kind" with no side effects.
//! Guards for host objects that only exist in some environments (`File`,
//! `Blob`, `FormData`, `URLSearchParams`, `Buffer`) still compile when the
//! corresponding cargo feature is off; they simply return `false`.

use crate::value::Value;

#[must_use]
pub fn is_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

#[must_use]
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

#[must_use]
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// True for every number, `NaN` and infinities included.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

#[must_use]
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

#[must_use]
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

#[must_use]
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// ```
/// use primkit_types::{Function, Value, is_function};
///
/// assert!(is_function(&Value::Function(Function::new(0, |_| Value::Undefined))));
/// assert!(!is_function(&Value::from(123)));
/// ```
#[must_use]
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

/// Plain key/value objects only; arrays, maps and other host objects are not plain.
#[must_use]
pub fn is_plain_object(value: &Value) -> bool {
    matches!(value, Value::Object(_))
}

#[must_use]
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

#[must_use]
pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

#[must_use]
pub fn is_regexp(value: &Value) -> bool {
    matches!(value, Value::RegExp(_))
}

#[must_use]
pub fn is_map(value: &Value) -> bool {
    matches!(value, Value::Map(_))
}

#[must_use]
pub fn is_set(value: &Value) -> bool {
    matches!(value, Value::Set(_))
}

#[must_use]
pub fn is_weak_map(value: &Value) -> bool {
    matches!(value, Value::WeakMap(_))
}

#[must_use]
pub fn is_weak_set(value: &Value) -> bool {
    matches!(value, Value::WeakSet(_))
}

#[must_use]
pub fn is_error(value: &Value) -> bool {
    matches!(value, Value::Error(_))
}

#[must_use]
pub fn is_promise(value: &Value) -> bool {
    matches!(value, Value::Promise(_))
}

#[must_use]
pub fn is_array_buffer(value: &Value) -> bool {
    matches!(value, Value::ArrayBuffer(_))
}

#[must_use]
pub fn is_data_view(value: &Value) -> bool {
    matches!(value, Value::DataView(_))
}

/// Buffers are byte arrays too, so they pass this guard.
#[must_use]
pub fn is_uint8_array(value: &Value) -> bool {
    matches!(value, Value::Uint8Array(_)) || is_buffer(value)
}

#[cfg(feature = "web")]
#[must_use]
pub fn is_file(value: &Value) -> bool {
    matches!(value, Value::File(_))
}

#[cfg(not(feature = "web"))]
#[must_use]
pub fn is_file(_value: &Value) -> bool {
    false
}

/// Files are blobs too, so they pass this guard.
#[cfg(feature = "web")]
#[must_use]
pub fn is_blob(value: &Value) -> bool {
    matches!(value, Value::Blob(_) | Value::File(_))
}

#[cfg(not(feature = "web"))]
#[must_use]
pub fn is_blob(_value: &Value) -> bool {
    false
}

#[cfg(feature = "web")]
#[must_use]
pub fn is_form_data(value: &Value) -> bool {
    matches!(value, Value::FormData(_))
}

#[cfg(not(feature = "web"))]
#[must_use]
pub fn is_form_data(_value: &Value) -> bool {
    false
}

#[cfg(feature = "web")]
#[must_use]
pub fn is_url_search_params(value: &Value) -> bool {
    matches!(value, Value::UrlSearchParams(_))
}

#[cfg(not(feature = "web"))]
#[must_use]
pub fn is_url_search_params(_value: &Value) -> bool {
    false
}

#[cfg(feature = "node")]
#[must_use]
pub fn is_buffer(value: &Value) -> bool {
    matches!(value, Value::Buffer(_))
}

#[cfg(not(feature = "node"))]
#[must_use]
pub fn is_buffer(_value: &Value) -> bool {
    false
}

/// Look up a guard by its kebab-case kind name (`"plain-object"`, `"weak-map"`, ...).
#[must_use]
pub fn guard_by_name(name: &str) -> Option<fn(&Value) -> bool> {
    let guard: fn(&Value) -> bool = match name {
        "null" => is_null,
        "undefined" => is_undefined,
        "string" => is_string,
        "number" => is_number,
        "boolean" => is_boolean,
        "symbol" => is_symbol,
        "bigint" => is_bigint,
        "function" => is_function,
        "plain-object" => is_plain_object,
        "array" => is_array,
        "date" => is_date,
        "regexp" => is_regexp,
        "map" => is_map,
        "set" => is_set,
        "weak-map" => is_weak_map,
        "weak-set" => is_weak_set,
        "error" => is_error,
        "promise" => is_promise,
        "file" => is_file,
        "blob" => is_blob,
        "form-data" => is_form_data,
        "url-search-params" => is_url_search_params,
        "array-buffer" => is_array_buffer,
        "data-view" => is_data_view,
        "uint8-array" => is_uint8_array,
        "buffer" => is_buffer,
        _ => return None,
    };
    Some(guard)
}
