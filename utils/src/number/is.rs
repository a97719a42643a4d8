//! Number property checks.

use primkit_types::{Value, is_number};

use crate::condition::{Condition, call_truthy};

/// Whether `value` is a number (`NaN` included), optionally also matching
/// `condition`.
///
/// A number literal compares with `==`, so a `NaN` literal never matches.
/// A [`Condition::Predicate`] or a runtime function of arity ≤ 1 receives the
/// number. Patterns and every other shape are no match.
///
/// ```
/// use primkit_utils::{Condition, number_is};
/// use primkit_types::Value;
///
/// assert!(number_is(&Value::Number(f64::NAN), None));
/// assert!(number_is(&Value::from(4), Condition::Predicate(&|n: &f64| *n > 3.0)));
/// assert!(!number_is(&Value::from("4"), None));
/// ```
pub fn number_is<'a>(value: &Value, condition: impl Into<Option<Condition<'a, f64>>>) -> bool {
    if !is_number(value) {
        return false;
    }
    let Some(condition) = Condition::defined(condition.into()) else {
        return true;
    };
    let Value::Number(n) = *value else {
        return false;
    };

    match condition {
        Condition::Value(Value::Number(literal)) => n == literal,
        Condition::Predicate(predicate) => predicate(&n),
        Condition::Value(Value::Function(function)) if function.arity() <= 1 => {
            call_truthy(&function, value)
        }
        Condition::Value(_) | Condition::Pattern(_) => false,
    }
}

fn number_satisfies(value: &Value, test: fn(f64) -> bool) -> bool {
    value.as_number().is_some_and(test)
}

#[must_use]
pub fn number_is_finite(value: &Value) -> bool {
    number_satisfies(value, f64::is_finite)
}

/// Finite with no fractional part.
#[must_use]
pub fn number_is_integer(value: &Value) -> bool {
    number_satisfies(value, |n| n.is_finite() && n.fract() == 0.0)
}

#[must_use]
pub fn number_is_positive(value: &Value) -> bool {
    number_satisfies(value, |n| n > 0.0)
}

#[must_use]
pub fn number_is_negative(value: &Value) -> bool {
    number_satisfies(value, |n| n < 0.0)
}

/// `0` or `-0`.
#[must_use]
pub fn number_is_zero(value: &Value) -> bool {
    number_satisfies(value, |n| n == 0.0)
}

#[must_use]
pub fn number_is_even(value: &Value) -> bool {
    number_satisfies(value, |n| n % 2.0 == 0.0)
}

/// Odd by absolute remainder, so `-3` is odd and `3.5` is not.
#[must_use]
pub fn number_is_odd(value: &Value) -> bool {
    number_satisfies(value, |n| (n % 2.0).abs() == 1.0)
}
