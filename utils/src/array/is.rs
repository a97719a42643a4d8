//! Array shape checks.

use primkit_types::{Value, is_array};

use crate::condition::{Condition, call_truthy};

/// Whether `value` is an array, optionally also satisfying `condition`.
///
/// The condition sees the whole collection:
/// - an array literal compares structurally,
/// - a [`Condition::Predicate`] or a runtime function of arity ≤ 1 is called
///   with the array,
/// - any other shape is no match.
///
/// ```
/// use primkit_utils::{Condition, array_is};
/// use primkit_types::Value;
///
/// let arr = Value::array([1, 2, 3]);
/// assert!(array_is(&arr, None));
/// assert!(!array_is(&Value::from("123"), None));
/// assert!(array_is(&arr, Condition::Predicate(&|items: &[Value]| items.len() == 3)));
/// ```
pub fn array_is<'a>(value: &Value, condition: impl Into<Option<Condition<'a, [Value]>>>) -> bool {
    if !is_array(value) {
        return false;
    }
    let Some(condition) = Condition::defined(condition.into()) else {
        return true;
    };
    let Value::Array(items) = value else {
        return false;
    };

    match condition {
        Condition::Value(literal @ Value::Array(_)) => *value == literal,
        Condition::Predicate(predicate) => predicate(items.as_slice()),
        Condition::Value(Value::Function(function)) if function.arity() <= 1 => {
            call_truthy(&function, value)
        }
        Condition::Value(_) | Condition::Pattern(_) => false,
    }
}

/// Whether `value` is an array with no elements.
#[must_use]
pub fn array_is_empty(value: &Value) -> bool {
    array_is(value, None) && value.as_array().is_some_and(<[Value]>::is_empty)
}

/// Whether `value` is an array whose every element satisfies `predicate`.
///
/// `predicate` is a `typeof` name (`"string"`, `"number"`, ...), a per-element
/// [`Condition::Predicate`], or a runtime function of arity ≤ 1. Any other
/// shape is `false`. An empty array satisfies every recognized shape.
pub fn array_is_every<'a>(value: &Value, predicate: impl Into<Condition<'a, Value>>) -> bool {
    let Some(items) = value.as_array() else {
        return false;
    };

    match predicate.into() {
        Condition::Value(Value::String(type_name)) => items
            .iter()
            .all(|item| item.type_of().as_str() == type_name),
        Condition::Predicate(predicate) => items.iter().all(predicate),
        Condition::Value(Value::Function(function)) if function.arity() <= 1 => {
            items.iter().all(|item| call_truthy(&function, item))
        }
        Condition::Value(_) | Condition::Pattern(_) => false,
    }
}
