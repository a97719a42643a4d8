//! Dispatch from command-line names to library calls.

use anyhow::{Context, Result, bail};
use chrono::SecondsFormat;
use primkit_types::{ConvertSettings, Value, format_number, guard_by_name};
use primkit_utils::{
    Condition, Converter, Diagnostics, SilentDiagnostics, array_has, array_has_length, array_is,
    array_is_empty, array_to_map, array_to_object, array_to_set, array_to_string,
    number_has, number_has_fraction, number_is, number_is_even, number_is_finite,
    number_is_integer, number_is_negative, number_is_odd, number_is_positive, number_is_zero,
    number_to_fixed, number_to_float, number_to_int, number_to_percent, string_has,
    string_has_alpha, string_has_chinese, string_has_emoji, string_has_line_break,
    string_has_lowercase, string_has_number, string_has_space, string_has_symbol,
    string_has_uppercase, string_is, string_is_date, string_is_email, string_is_hex,
    string_is_html, string_is_ip, string_is_ipv4, string_is_ipv6, string_is_json,
    string_is_number, string_is_phone, string_is_slug, string_is_time, string_is_url,
    string_is_uuid, string_to_array, string_to_camel_case, string_to_constant,
    string_to_slug, string_to_title_case, string_to_upper,
};

/// Flags of `primkit to`.
#[derive(Debug, Default)]
pub struct ToOptions {
    pub fallback: Option<f64>,
    pub digits: Option<usize>,
    pub separator: Option<String>,
    pub key: Option<String>,
}

/// Take the raw argument as a string, or parse it as JSON.
pub fn parse_input(raw: &str, json: bool) -> Result<Value> {
    if !json {
        return Ok(Value::from(raw));
    }
    let parsed: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("input is not valid JSON: {raw}"))?;
    Ok(Value::from(parsed))
}

/// Numeric checks see `"42"` as 42. Text that doesn't coerce stays text.
fn numeric(value: &Value) -> Value {
    let Value::String(text) = value else {
        return value.clone();
    };
    Converter::with_diagnostics(ConvertSettings::default(), SilentDiagnostics)
        .string_to_number(text)
        .map_or_else(|| value.clone(), Value::Number)
}

/// Text for the string conversions: strings as-is, anything else coerced.
fn text_of(value: &Value) -> String {
    value
        .as_str()
        .map_or_else(|| value.to_display_string(), str::to_string)
}

/// An array `--part` is JSON when it parses, otherwise a type name.
fn array_part(raw: &str) -> Value {
    serde_json::from_str::<serde_json::Value>(raw).map_or_else(|_| Value::from(raw), Value::from)
}

fn render(value: &Value) -> Result<String> {
    Ok(match value.to_json()? {
        Some(json) => json.to_string(),
        None => "undefined".to_string(),
    })
}

pub fn run_is(check: &str, value: &Value) -> Result<bool> {
    let result = match check {
        "string" => string_is(value, None),
        "email" => string_is_email(value),
        "url" => string_is_url(value),
        "phone" => string_is_phone(value),
        "numeric" => string_is_number(value),
        "json" => string_is_json(value),
        "uuid" => string_is_uuid(value),
        "hex" => string_is_hex(value),
        "date" => string_is_date(value),
        "time" => string_is_time(value),
        "ipv4" => string_is_ipv4(value),
        "ipv6" => string_is_ipv6(value),
        "ip" => string_is_ip(value),
        "html" => string_is_html(value),
        "slug" => string_is_slug(value),

        "array" => array_is(value, None),
        "empty-array" => array_is_empty(value),

        "number" => number_is(&numeric(value), None),
        "finite" => number_is_finite(&numeric(value)),
        "integer" => number_is_integer(&numeric(value)),
        "positive" => number_is_positive(&numeric(value)),
        "negative" => number_is_negative(&numeric(value)),
        "zero" => number_is_zero(&numeric(value)),
        "even" => number_is_even(&numeric(value)),
        "odd" => number_is_odd(&numeric(value)),

        other => match guard_by_name(other) {
            Some(guard) => guard(value),
            None => bail!("unknown check: {other}"),
        },
    };
    Ok(result)
}

pub fn run_has(check: &str, value: &Value, part: Option<&str>) -> Result<bool> {
    let result = match check {
        "string" => string_has(value, part.map(Condition::from)),
        "digit" => string_has_number(value),
        "alpha" => string_has_alpha(value),
        "chinese" => string_has_chinese(value),
        "space" => string_has_space(value),
        "uppercase" => string_has_uppercase(value),
        "lowercase" => string_has_lowercase(value),
        "symbol" => string_has_symbol(value),
        "emoji" => string_has_emoji(value),
        "line-break" => string_has_line_break(value),

        "array" => array_has(value, part.map(|raw| Condition::Value(array_part(raw)))),
        "length" => {
            let length = part
                .map(str::parse::<usize>)
                .transpose()
                .context("--part must be a non-negative integer for `length`")?;
            array_has_length(value, length)
        }

        "number" => number_has(&numeric(value), part.map(Condition::from)),
        "fraction" => number_has_fraction(&numeric(value)),

        other => bail!("unknown check: {other}"),
    };
    Ok(result)
}

pub fn run_to<D: Diagnostics>(
    conversion: &str,
    value: &Value,
    options: &ToOptions,
    converter: &Converter<D>,
) -> Result<String> {
    let output = match conversion {
        "upper" => string_to_upper(&text_of(value)),
        "camel-case" => string_to_camel_case(&text_of(value)),
        "slug" => string_to_slug(&text_of(value)),
        "constant" => string_to_constant(&text_of(value)),
        "title-case" => string_to_title_case(&text_of(value)),

        "number" => converter
            .string_to_number(&text_of(value))
            .map_or_else(|| "null".to_string(), format_number),
        "boolean" => converter
            .string_to_boolean(&text_of(value))
            .map_or_else(|| "null".to_string(), |flag| flag.to_string()),
        "date" => converter
            .string_to_date(&text_of(value))
            .map_or_else(
                || "null".to_string(),
                |date| date.to_rfc3339_opts(SecondsFormat::Millis, true),
            ),
        "json" => match converter.string_to_json(&text_of(value)) {
            Some(parsed) => render(&parsed)?,
            None => "null".to_string(),
        },
        "array" => {
            let text = text_of(value);
            let items = match options.separator.as_deref() {
                Some(delimiter) => string_to_array(&text, delimiter),
                None => converter.string_to_array(&text),
            };
            serde_json::to_string(&items)?
        }

        "int" => format_number(number_to_int(value, options.fallback)),
        "float" => format_number(number_to_float(value, options.fallback)),
        "fixed" => match options.digits {
            Some(digits) => number_to_fixed(value, digits),
            None => converter.number_to_fixed(value),
        },
        "percent" => match options.digits {
            Some(digits) => number_to_percent(value, digits),
            None => converter.number_to_percent(value),
        },

        "join" => match options.separator.as_deref() {
            Some(separator) => array_to_string(value, separator),
            None => converter.array_to_string(value),
        },
        "set" => render(&Value::Array(array_to_set(value)))?,
        "map" => {
            let key = options
                .key
                .as_deref()
                .context("`map` needs --key <FIELD>")?;
            render(&Value::Object(array_to_map(value, key)))?
        }
        "object" => render(&Value::Object(array_to_object(value)))?,
        "array-json" => converter.array_to_json(value),

        other => bail!("unknown conversion: {other}"),
    };
    Ok(output)
}
