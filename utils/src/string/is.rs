//! String format checks.

use primkit_types::Value;
use serde_json::Value as Json;

use crate::condition::{Condition, call_truthy};
use crate::string::patterns::patterns;

/// Whether `value` is a string, optionally also matching `condition`.
///
/// Resolution order:
/// 1. a string literal compares for equality,
/// 2. a pattern ([`Condition::Pattern`] or a runtime `RegExp`) must match,
/// 3. a [`Condition::Predicate`] or runtime function decides,
/// 4. any other shape is no match.
///
/// ```
/// use primkit_utils::{Condition, string_is};
/// use primkit_types::Value;
///
/// let hello = Value::from("hello");
/// assert!(string_is(&hello, None));
/// assert!(string_is(&hello, Condition::from("hello")));
/// assert!(!string_is(&Value::from(42), None));
/// ```
pub fn string_is<'a>(value: &Value, condition: impl Into<Option<Condition<'a, str>>>) -> bool {
    let Value::String(s) = value else {
        return false;
    };
    let Some(condition) = Condition::defined(condition.into()) else {
        return true;
    };

    match condition {
        Condition::Value(Value::String(literal)) => *s == literal,
        Condition::Value(Value::RegExp(re)) => re.is_match(s),
        Condition::Pattern(re) => re.is_match(s),
        Condition::Predicate(predicate) => predicate(s.as_str()),
        Condition::Value(Value::Function(function)) => call_truthy(&function, value),
        Condition::Value(_) => false,
    }
}

#[must_use]
pub fn string_is_email(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().email))
}

/// `http://` or `https://` followed by a dotted host.
#[must_use]
pub fn string_is_url(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().url))
}

/// Mainland China mobile number: `1`, then `3`-`9`, then nine digits.
#[must_use]
pub fn string_is_phone(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().phone))
}

/// One or more ASCII digits and nothing else. No sign, no decimal point.
#[must_use]
pub fn string_is_number(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().digits))
}

/// Whether the text parses as a JSON object or array.
///
/// Scalars such as `"1"` or `"null"` are valid JSON but not accepted here.
#[must_use]
pub fn string_is_json(value: &Value) -> bool {
    let structured = |s: &str| {
        serde_json::from_str::<Json>(s).is_ok_and(|json| json.is_object() || json.is_array())
    };
    string_is(value, Condition::Predicate(&structured))
}

/// RFC 4122 UUID of version 1 through 5, any letter case.
#[must_use]
pub fn string_is_uuid(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().uuid))
}

/// Hex color: optional `#`, then 3 or 6 hex digits.
#[must_use]
pub fn string_is_hex(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().hex_color))
}

/// `YYYY-MM-DD` shape. The calendar is not checked.
#[must_use]
pub fn string_is_date(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().date))
}

/// 24-hour `HH:mm` or `HH:mm:ss`.
#[must_use]
pub fn string_is_time(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().time))
}

#[must_use]
pub fn string_is_ipv4(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().ipv4))
}

/// Loose IPv6 check.
///
/// Only the full eight-group form and the `::`-prefixed form are anchored at
/// both ends; any text containing a run of groups ending in `::` passes.
#[must_use]
pub fn string_is_ipv6(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().ipv6))
}

#[must_use]
pub fn string_is_ip(value: &Value) -> bool {
    string_is_ipv4(value) || string_is_ipv6(value)
}

/// Whether the text contains anything shaped like a tag.
#[must_use]
pub fn string_is_html(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().html_tag))
}

/// Lowercase alphanumeric groups joined by single hyphens.
#[must_use]
pub fn string_is_slug(value: &Value) -> bool {
    string_is(value, Condition::Pattern(&patterns().slug))
}
