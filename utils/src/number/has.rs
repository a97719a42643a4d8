//! Checks against a number's decimal rendering.

use primkit_types::{Value, format_number};

use crate::condition::Condition;
use crate::number::is::number_is;

/// Whether the number's rendering contains `condition`.
///
/// Non-numbers are always `false`. With no condition the number must not be
/// `NaN`. A string is a substring of the rendering (`12.5` renders as
/// `"12.5"`, `1e21` as `"1e+21"`), a pattern must match the rendering and a
/// [`Condition::Predicate`] receives the number itself. Any other shape is
/// `false`.
pub fn number_has<'a>(value: &Value, condition: impl Into<Option<Condition<'a, f64>>>) -> bool {
    if !number_is(value, None) {
        return false;
    }
    let Value::Number(n) = *value else {
        return false;
    };

    match Condition::defined(condition.into()) {
        None => !n.is_nan(),
        Some(Condition::Value(Value::String(part))) => format_number(n).contains(part.as_str()),
        Some(Condition::Value(Value::RegExp(re))) => re.is_match(&format_number(n)),
        Some(Condition::Pattern(re)) => re.is_match(&format_number(n)),
        Some(Condition::Predicate(predicate)) => predicate(&n),
        Some(Condition::Value(_)) => false,
    }
}

/// Finite with a non-zero fractional part.
#[must_use]
pub fn number_has_fraction(value: &Value) -> bool {
    number_has(value, Condition::Predicate(&|n: &f64| n.is_finite() && n.fract() != 0.0))
}
