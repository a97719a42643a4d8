//! Array conversions.
//!
//! Every function here is total: a non-array input produces `None`, an empty
//! string or an empty collection, never a panic.

use indexmap::IndexMap;
use primkit_types::{DEFAULT_SEPARATOR, Object, Value, join_values};

use crate::array::is::array_is;
use crate::convert::Converter;
use crate::diagnostics::Diagnostics;
use crate::error::ConversionError;

/// Apply `transform` to the array, or return `None` for non-arrays.
///
/// ```
/// use primkit_utils::array_to;
/// use primkit_types::Value;
///
/// assert_eq!(array_to(&Value::array([1, 2, 3]), <[Value]>::len), Some(3));
/// assert_eq!(array_to(&Value::from("abc"), <[Value]>::len), None);
/// ```
pub fn array_to<R>(value: &Value, transform: impl FnOnce(&[Value]) -> R) -> Option<R> {
    if !array_is(value, None) {
        return None;
    }
    value.as_array().map(transform)
}

/// Join the elements with `separator` (default `,`).
///
/// Elements render the way string coercion renders them; `null` and
/// `undefined` render empty. Non-arrays give `""`.
pub fn array_to_string<'s>(value: &Value, separator: impl Into<Option<&'s str>>) -> String {
    let separator = separator.into().unwrap_or(DEFAULT_SEPARATOR);
    array_to(value, |items| join_values(items, separator)).unwrap_or_default()
}

/// Distinct elements in first-occurrence order.
///
/// Uniqueness follows membership equality, so `NaN` collapses to a single
/// entry and `0` and `-0` are the same element.
#[must_use]
pub fn array_to_set(value: &Value) -> Vec<Value> {
    array_to(value, |items| {
        let mut distinct: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if !distinct.iter().any(|seen| seen.same_value_zero(item)) {
                distinct.push(item.clone());
            }
        }
        distinct
    })
    .unwrap_or_default()
}

/// Index the elements by the display string of their `key_field`.
///
/// Only object-like elements carrying the field take part: plain objects,
/// arrays, byte arrays and buffers (for an index or `length`), regular
/// expressions (`source`, `lastIndex`) and errors (`name`, `message`).
/// Primitives, `null` and elements without the field are skipped. When two
/// elements produce the same key the later one wins, in the earlier one's
/// position.
///
/// ```
/// use primkit_utils::array_to_map;
/// use primkit_types::Value;
///
/// let a = Value::object([("id", Value::from("a")), ("x", Value::from(1))]);
/// let map = array_to_map(&Value::array([a.clone(), Value::from("skip")]), "id");
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["a"], a);
/// ```
#[must_use]
pub fn array_to_map(value: &Value, key_field: &str) -> IndexMap<String, Value> {
    array_to(value, |items| {
        items
            .iter()
            .filter_map(|item| {
                field_of(item, key_field).map(|key| (key.to_display_string(), item.clone()))
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Key the elements by their index: `"0"`, `"1"`, ...
#[must_use]
pub fn array_to_object(value: &Value) -> Object {
    array_to(value, |items| {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item.clone()))
            .collect()
    })
    .unwrap_or_default()
}

/// Serialize the array to JSON text.
///
/// Non-arrays and arrays that cannot be serialized (a `BigInt` anywhere
/// inside) give `""`.
#[must_use]
pub fn array_to_json(value: &Value) -> String {
    if !array_is(value, None) {
        return String::new();
    }
    match value.to_json() {
        Ok(Some(json)) => json.to_string(),
        Ok(None) => String::new(),
        Err(error) => {
            tracing::debug!(%error, "array is not serializable");
            String::new()
        }
    }
}

/// Property lookup that mirrors what an `in` check would see on the
/// object-like variants.
fn field_of(item: &Value, field: &str) -> Option<Value> {
    match item {
        Value::Object(entries) => entries.get(field).cloned(),
        Value::Array(elements) => indexed_field(elements, field, Value::clone),
        Value::Uint8Array(bytes) => indexed_field(bytes, field, byte_value),
        #[cfg(feature = "node")]
        Value::Buffer(bytes) => indexed_field(bytes, field, byte_value),
        Value::RegExp(re) => match field {
            "source" => Some(Value::String(re.as_str().to_string())),
            "lastIndex" => Some(Value::Number(0.0)),
            _ => None,
        },
        Value::Error(error) => match field {
            "name" => Some(Value::String(error.name.clone())),
            "message" => Some(Value::String(error.message.clone())),
            _ => None,
        },
        _ => None,
    }
}

/// `length` or a canonical index into an indexed collection.
#[allow(clippy::cast_precision_loss)]
fn indexed_field<T>(elements: &[T], field: &str, read: impl Fn(&T) -> Value) -> Option<Value> {
    if field == "length" {
        return Some(Value::Number(elements.len() as f64));
    }
    array_index(field).and_then(|i| elements.get(i)).map(read)
}

fn byte_value(byte: &u8) -> Value {
    Value::Number(f64::from(*byte))
}

/// Canonical array index: digits without a leading zero (except `"0"`).
fn array_index(field: &str) -> Option<usize> {
    let canonical = !field.is_empty()
        && field.bytes().all(|b| b.is_ascii_digit())
        && (field == "0" || !field.starts_with('0'));
    if canonical { field.parse().ok() } else { None }
}

impl<D: Diagnostics> Converter<D> {
    /// [`array_to_string`] with the configured separator.
    pub fn array_to_string(&self, value: &Value) -> String {
        array_to_string(value, self.settings().separator())
    }

    /// [`array_to_json`], reporting arrays that can't be serialized.
    pub fn array_to_json(&self, value: &Value) -> String {
        if !array_is(value, None) {
            return String::new();
        }
        match value.to_json() {
            Ok(Some(json)) => json.to_string(),
            Ok(None) => String::new(),
            Err(error) => self
                .fail(ConversionError::Unserializable(error))
                .unwrap_or_default(),
        }
    }
}
