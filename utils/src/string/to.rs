//! String conversions.
//!
//! Case transforms cannot fail. The parsing conversions (number, boolean,
//! date, JSON) return `None` on bad input and report the failure to the
//! converter's [`Diagnostics`] sink; the free functions report through
//! `tracing`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use primkit_types::{ConvertSettings, DEFAULT_DELIMITER, Value};
use regex::Captures;
use serde_json::Value as Json;

use crate::convert::Converter;
use crate::diagnostics::Diagnostics;
use crate::error::ConversionError;
use crate::number::coerce_number;
use crate::string::patterns::patterns;

/// Date-and-time layouts tried after RFC 3339 and RFC 2822. No offset means UTC.
const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Layouts with a `GMT+hhmm` offset, the way dates render as text.
const OFFSET_DATE_TIME_FORMATS: [&str; 2] =
    ["%a %b %d %Y %H:%M:%S GMT%z", "%b %d %Y %H:%M:%S GMT%z"];

/// Date-only layouts, taken as midnight UTC.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d %Y",
    "%B %d %Y",
    "%B %d, %Y",
    "%d %B %Y",
    "%a %b %d %Y",
];

/// Apply `convert` to the string.
pub fn string_to<T>(s: &str, convert: impl FnOnce(&str) -> T) -> T {
    convert(s)
}

/// Full Unicode uppercase. Idempotent.
#[must_use]
pub fn string_to_upper(s: &str) -> String {
    string_to(s, str::to_uppercase)
}

/// `hello world` / `hello-world` / `hello_world` to `helloWorld`.
///
/// Runs of `-`, `_` and whitespace are dropped and the character after them
/// is uppercased; the first character is lowercased.
#[must_use]
pub fn string_to_camel_case(s: &str) -> String {
    string_to(s, |s| {
        let joined = patterns()
            .camel_separator
            .replace_all(s, |caps: &Captures<'_>| {
                caps.get(1)
                    .map_or_else(String::new, |c| c.as_str().to_uppercase())
            });
        let mut chars = joined.chars();
        match chars.next() {
            Some(first) if first != '\n' => first.to_lowercase().chain(chars).collect(),
            _ => joined.into_owned(),
        }
    })
}

/// Lowercase, drop everything except ASCII word characters, whitespace and
/// `-`, then turn whitespace runs into `-`.
///
/// ```
/// use primkit_utils::string_to_slug;
///
/// assert_eq!(string_to_slug("  Hello World! "), "hello-world");
/// ```
#[must_use]
pub fn string_to_slug(s: &str) -> String {
    string_to(s, |s| {
        let p = patterns();
        let lowered = s.trim().to_lowercase();
        let stripped = p.slug_strip.replace_all(&lowered, "");
        p.whitespace_run.replace_all(&stripped, "-").into_owned()
    })
}

/// `hello world` to `HELLO_WORLD`. Only ASCII letters change case.
#[must_use]
pub fn string_to_constant(s: &str) -> String {
    string_to(s, |s| {
        patterns()
            .constant_separator
            .replace_all(s.trim(), "_")
            .to_ascii_uppercase()
    })
}

/// Lowercase, then uppercase the first word character of the text and of
/// every word after whitespace, `-` or `_`.
#[must_use]
pub fn string_to_title_case(s: &str) -> String {
    string_to(s, |s| {
        let lowered = s.to_lowercase();
        patterns()
            .title_word_start
            .replace_all(&lowered, |caps: &Captures<'_>| caps[0].to_uppercase())
            .into_owned()
    })
}

/// Numeric coercion of the whole text.
///
/// Blank text is 0; see [`Converter::string_to_number`].
#[must_use]
pub fn string_to_number(s: &str) -> Option<f64> {
    default_converter().string_to_number(s)
}

/// Keyword lookup in the default truthy/falsy tables, ignoring case.
///
/// ```
/// use primkit_utils::string_to_boolean;
///
/// assert_eq!(string_to_boolean("YES"), Some(true));
/// assert_eq!(string_to_boolean("off"), Some(false));
/// assert_eq!(string_to_boolean("maybe"), None);
/// ```
#[must_use]
pub fn string_to_boolean(s: &str) -> Option<bool> {
    default_converter().string_to_boolean(s)
}

#[must_use]
pub fn string_to_date(s: &str) -> Option<DateTime<Utc>> {
    default_converter().string_to_date(s)
}

#[must_use]
pub fn string_to_json(s: &str) -> Option<Value> {
    default_converter().string_to_json(s)
}

/// Split on `delimiter` (default `,`). An empty delimiter splits into
/// characters; an empty string gives one empty element.
pub fn string_to_array<'d>(s: &str, delimiter: impl Into<Option<&'d str>>) -> Vec<String> {
    let delimiter = delimiter.into().unwrap_or(DEFAULT_DELIMITER);
    string_to(s, |s| {
        if delimiter.is_empty() {
            s.chars().map(String::from).collect()
        } else {
            s.split(delimiter).map(str::to_string).collect()
        }
    })
}

fn default_converter() -> Converter {
    Converter::new(ConvertSettings::default())
}

fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    let without_zone_name = strip_zone_name(text);
    if let Some(parsed) = OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(without_zone_name, format).ok())
    {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Some(parsed) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(parsed.and_utc());
    }

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| parse_partial_date(text))?;
    date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc())
}

/// Drop a trailing `(Zone Name)`; the offset before it is what counts.
fn strip_zone_name(text: &str) -> &str {
    text.strip_suffix(')')
        .and_then(|rest| rest.rfind(" (").map(|start| rest[..start].trim_end()))
        .unwrap_or(text)
}

/// `YYYY` or `YYYY-MM`, taken as the first day of the period.
fn parse_partial_date(text: &str) -> Option<NaiveDate> {
    let (year, month) = match text.split_once('-') {
        Some((year, month)) if month.len() == 2 => (year, month.parse().ok()?),
        Some(_) => return None,
        None => (text, 1),
    };
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

impl<D: Diagnostics> Converter<D> {
    /// Numeric coercion of the whole text.
    ///
    /// Surrounding whitespace is ignored and blank text is 0. `0x`, `0o` and
    /// `0b` prefixes are honored, as is `Infinity`. Anything else must be a
    /// complete decimal literal; otherwise the failure is reported and the
    /// result is `None`.
    pub fn string_to_number(&self, s: &str) -> Option<f64> {
        let n = coerce_number(s);
        if n.is_nan() {
            return self.fail(ConversionError::InvalidNumber(s.to_string()));
        }
        Some(n)
    }

    /// Keyword lookup in the configured truthy/falsy tables.
    pub fn string_to_boolean(&self, s: &str) -> Option<bool> {
        match self.settings().keyword(s) {
            Some(flag) => Some(flag),
            None => self.fail(ConversionError::InvalidBoolean(s.to_string())),
        }
    }

    /// Calendar parsing.
    ///
    /// Accepts RFC 3339, RFC 2822, ISO-like date-times with or without
    /// seconds and fraction (`T` or space separated), the
    /// `Tue Jan 02 2024 03:04:05 GMT+0000 (Zone)` form dates display as,
    /// `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, month-name dates
    /// (`Jan 15 2024`, `January 15, 2024`, `15 January 2024`), `YYYY-MM`
    /// and `YYYY`. Text without an offset is UTC.
    pub fn string_to_date(&self, s: &str) -> Option<DateTime<Utc>> {
        match parse_date(s) {
            Some(date) => Some(date),
            None => self.fail(ConversionError::InvalidDate(s.to_string())),
        }
    }

    /// Parse JSON text into a [`Value`]. Scalars are accepted.
    pub fn string_to_json(&self, s: &str) -> Option<Value> {
        match serde_json::from_str::<Json>(s) {
            Ok(json) => Some(Value::from(json)),
            Err(source) => self.fail(ConversionError::InvalidJson {
                input: s.to_string(),
                source,
            }),
        }
    }

    /// [`string_to_array`] with the configured delimiter.
    pub fn string_to_array(&self, s: &str) -> Vec<String> {
        string_to_array(s, self.settings().delimiter())
    }
}
