//! Number conversions.
//!
//! The parsing conversions accept any value: it is rendered to text first and
//! the leading number is read from that. Unparsable input never produces
//! `NaN`; it produces the fallback.

use primkit_types::{DEFAULT_FIXED_DIGITS, DEFAULT_PERCENT_DIGITS, Value};

use crate::convert::Converter;
use crate::diagnostics::Diagnostics;
use crate::number::is::number_is;
use crate::number::parse::{parse_float_prefix, parse_int_prefix, to_fixed};

/// Apply `transform` to the number, or return `None` for non-numbers.
///
/// ```
/// use primkit_utils::number_to;
/// use primkit_types::Value;
///
/// assert_eq!(number_to(&Value::from(5), |n| n * 2.0), Some(10.0));
/// assert_eq!(number_to(&Value::from("5"), |n| n * 2.0), None);
/// ```
pub fn number_to<T>(value: &Value, transform: impl FnOnce(f64) -> T) -> Option<T> {
    if !number_is(value, None) {
        return None;
    }
    value.as_number().map(transform)
}

/// The number itself, or `None` for non-numbers.
#[must_use]
pub fn number_to_self(value: &Value) -> Option<f64> {
    number_to(value, |n| n)
}

/// Leading integer of the value's text, or `fallback` (default 0).
///
/// `"42px"` gives 42, `3.99` gives 3 and `"abc"` gives the fallback.
///
/// ```
/// use primkit_utils::number_to_int;
/// use primkit_types::Value;
///
/// assert_eq!(number_to_int(&Value::from("42px"), None), 42.0);
/// assert_eq!(number_to_int(&Value::from("abc"), 5.0), 5.0);
/// ```
pub fn number_to_int(value: &Value, fallback: impl Into<Option<f64>>) -> f64 {
    let n = parse_int_prefix(&value.to_display_string());
    if n.is_nan() {
        fallback.into().unwrap_or(0.0)
    } else {
        n
    }
}

/// Leading decimal number of the value's text, or `fallback` (default 0).
pub fn number_to_float(value: &Value, fallback: impl Into<Option<f64>>) -> f64 {
    let n = parse_float_prefix(&value.to_display_string());
    if n.is_nan() {
        fallback.into().unwrap_or(0.0)
    } else {
        n
    }
}

/// Fixed-point text with `digits` decimals (default 2).
///
/// Unparsable input renders as zero.
///
/// ```
/// use primkit_utils::number_to_fixed;
/// use primkit_types::Value;
///
/// assert_eq!(number_to_fixed(&Value::from(3.14159), None), "3.14");
/// assert_eq!(number_to_fixed(&Value::from("abc"), 1), "0.0");
/// ```
pub fn number_to_fixed(value: &Value, digits: impl Into<Option<usize>>) -> String {
    to_fixed(
        number_to_float(value, None),
        digits.into().unwrap_or(DEFAULT_FIXED_DIGITS),
    )
}

/// Percentage text with `digits` decimals (default 0): `0.256` gives `"26%"`.
pub fn number_to_percent(value: &Value, digits: impl Into<Option<usize>>) -> String {
    let n = number_to_float(value, None);
    let digits = digits.into().unwrap_or(DEFAULT_PERCENT_DIGITS);
    format!("{}%", to_fixed(n * 100.0, digits))
}

impl<D: Diagnostics> Converter<D> {
    /// [`number_to_fixed`] with the configured digit count.
    pub fn number_to_fixed(&self, value: &Value) -> String {
        number_to_fixed(value, self.settings().fixed_digits())
    }

    /// [`number_to_percent`] with the configured digit count.
    pub fn number_to_percent(&self, value: &Value) -> String {
        number_to_percent(value, self.settings().percent_digits())
    }
}
