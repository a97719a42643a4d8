//! Character-class and substring checks.

use primkit_types::Value;

use crate::condition::{Condition, call_truthy};
use crate::string::is::string_is;
use crate::string::patterns::patterns;

/// Whether the string contains `part`.
///
/// Non-strings are always `false`. With no `part` the string must be
/// non-empty. A string `part` is a substring, a pattern must match somewhere
/// and a predicate or runtime function decides on the whole string. Any
/// other shape is `false`.
///
/// ```
/// use primkit_utils::{Condition, string_has};
/// use primkit_types::Value;
///
/// let text = Value::from("hello world");
/// assert!(string_has(&text, Condition::from("world")));
/// assert!(!string_has(&Value::from(""), None));
/// ```
pub fn string_has<'a>(value: &Value, part: impl Into<Option<Condition<'a, str>>>) -> bool {
    if !string_is(value, None) {
        return false;
    }
    let Value::String(s) = value else {
        return false;
    };

    match Condition::defined(part.into()) {
        None => !s.is_empty(),
        Some(Condition::Value(Value::String(needle))) => s.contains(needle.as_str()),
        Some(Condition::Value(Value::RegExp(re))) => re.is_match(s),
        Some(Condition::Pattern(re)) => re.is_match(s),
        Some(Condition::Predicate(predicate)) => predicate(s.as_str()),
        Some(Condition::Value(Value::Function(function))) => call_truthy(&function, value),
        Some(Condition::Value(_)) => false,
    }
}

/// At least one ASCII digit.
#[must_use]
pub fn string_has_number(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().digit))
}

/// At least one ASCII letter.
#[must_use]
pub fn string_has_alpha(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().alpha))
}

/// At least one CJK unified ideograph in U+4E00..=U+9FA5.
#[must_use]
pub fn string_has_chinese(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().chinese))
}

#[must_use]
pub fn string_has_space(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().space))
}

#[must_use]
pub fn string_has_uppercase(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().uppercase))
}

#[must_use]
pub fn string_has_lowercase(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().lowercase))
}

/// At least one of ``!@#$%^&*(),.?":{}|<>-+=\[]~``.
#[must_use]
pub fn string_has_symbol(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().symbol))
}

/// At least one emoji from the emoticon, pictograph, transport or
/// supplemental symbol blocks.
#[must_use]
pub fn string_has_emoji(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().emoji))
}

#[must_use]
pub fn string_has_line_break(value: &Value) -> bool {
    string_has(value, Condition::Pattern(&patterns().line_break))
}
