//! Array containment checks.

use primkit_types::Value;

use crate::array::is::array_is;
use crate::condition::{Condition, call_truthy};

/// Whether the array contains something matching `condition`.
///
/// Fails closed: non-arrays are always `false`. Resolution order:
/// 1. no condition: the array is non-empty;
/// 2. a [`Condition::Predicate`] or runtime function of arity exactly 1
///    receives the whole array;
/// 3. a string is a `typeof` name: at least one element has that type;
/// 4. anything else is a membership test (`NaN` finds `NaN`).
///
/// ```
/// use primkit_utils::{Condition, array_has};
/// use primkit_types::Value;
///
/// assert!(array_has(&Value::array(["a", "b"]), Condition::from("string")));
/// assert!(array_has(&Value::array([1, 2, 3]), Condition::from(2)));
/// assert!(!array_has(&Value::Array(Vec::new()), None));
/// ```
pub fn array_has<'a>(value: &Value, condition: impl Into<Option<Condition<'a, [Value]>>>) -> bool {
    if !array_is(value, None) {
        return false;
    }
    let Value::Array(items) = value else {
        return false;
    };

    match Condition::defined(condition.into()) {
        None => !items.is_empty(),
        Some(Condition::Predicate(predicate)) => predicate(items.as_slice()),
        Some(Condition::Value(Value::Function(function))) if function.arity() == 1 => {
            call_truthy(&function, value)
        }
        Some(Condition::Value(Value::String(type_name))) => items
            .iter()
            .any(|item| item.type_of().as_str() == type_name),
        Some(Condition::Value(needle)) => items.iter().any(|item| item.same_value_zero(&needle)),
        Some(Condition::Pattern(pattern)) => items
            .iter()
            .any(|item| matches!(item, Value::RegExp(re) if re.as_str() == pattern.as_str())),
    }
}

/// Whether the array has exactly `length` elements, or at least one when
/// `length` is `None`.
#[must_use]
pub fn array_has_length(value: &Value, length: Option<usize>) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };
    match length {
        None => !items.is_empty(),
        Some(expected) => items.len() == expected,
    }
}
