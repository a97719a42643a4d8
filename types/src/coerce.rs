//! Primitive coercions: truthiness and string conversion.

use std::fmt::Write as _;

use crate::value::Value;

/// Render a number the way the runtime's `String(n)` does.
///
/// Shortest round-trip digits; exponent notation outside `[1e-6, 1e21)`.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{n}");
    }

    // `{:e}` renders `1e21` / `1.5e-7`; the runtime spells positive exponents `e+21`.
    let rendered = format!("{n:e}");
    match rendered.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => rendered,
    }
}

/// Join values with `separator`, rendering `null`/`undefined` as empty.
#[must_use]
pub fn join_values(items: &[Value], separator: &str) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push_str(separator);
        }
        if !matches!(item, Value::Null | Value::Undefined) {
            out.push_str(&item.to_display_string());
        }
    }
    out
}

/// Percent-encode one component of an `application/x-www-form-urlencoded` body.
fn form_urlencode(raw: &str, out: &mut String) {
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
}

impl Value {
    /// Boolean coercion.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN`, `0n` and `""` are falsy;
    /// everything else, including empty arrays and objects, is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(*n == 0.0 || n.is_nan()),
            Value::BigInt(i) => *i != 0,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// String coercion, as `String(value)` would produce.
    #[must_use]
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::BigInt(i) => i.to_string(),
            Value::String(s) => s.clone(),
            Value::Symbol(sym) => format!("Symbol({})", sym.description().unwrap_or_default()),
            Value::Function(f) => {
                format!("function {}() {{ [native code] }}", f.name().unwrap_or_default())
            }
            Value::Array(items) => join_values(items, ","),
            Value::Uint8Array(bytes) => bytes
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Date(date) => date
                .format("%a %b %d %Y %H:%M:%S GMT+0000 (Coordinated Universal Time)")
                .to_string(),
            Value::RegExp(re) => format!("/{}/", re.as_str()),
            Value::Map(_) => "[object Map]".to_string(),
            Value::Set(_) => "[object Set]".to_string(),
            Value::WeakMap(_) => "[object WeakMap]".to_string(),
            Value::WeakSet(_) => "[object WeakSet]".to_string(),
            Value::Error(err) if err.message.is_empty() => err.name.clone(),
            Value::Error(err) => format!("{}: {}", err.name, err.message),
            Value::Promise(_) => "[object Promise]".to_string(),
            Value::ArrayBuffer(_) => "[object ArrayBuffer]".to_string(),
            Value::DataView(_) => "[object DataView]".to_string(),
            #[cfg(feature = "web")]
            Value::Blob(_) => "[object Blob]".to_string(),
            #[cfg(feature = "web")]
            Value::File(_) => "[object File]".to_string(),
            #[cfg(feature = "web")]
            Value::FormData(_) => "[object FormData]".to_string(),
            #[cfg(feature = "web")]
            Value::UrlSearchParams(pairs) => {
                let mut out = String::new();
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        out.push('&');
                    }
                    form_urlencode(key, &mut out);
                    out.push('=');
                    form_urlencode(value, &mut out);
                }
                out
            }
            #[cfg(feature = "node")]
            Value::Buffer(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::{format_number, join_values};
    use crate::value::{ErrorValue, Value};

    #[test]
    fn integral_numbers_have_no_fraction() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(3.14), "3.14");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e300), "-2e+300");
    }

    #[test]
    fn non_finite_numbers_have_names() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn join_skips_nullish_elements() {
        let items = vec![Value::from(1), Value::Null, Value::Undefined, Value::from("x")];
        assert_eq!(join_values(&items, "-"), "1---x");
    }

    #[test]
    fn nested_arrays_flatten_with_commas() {
        let nested = Value::array([Value::array([1, 2]), Value::from(3)]);
        assert_eq!(nested.to_display_string(), "1,2,3");
    }

    #[test]
    fn display_strings_for_objects() {
        assert_eq!(Value::object([("a", Value::from(1))]).to_display_string(), "[object Object]");
        assert_eq!(Value::Error(ErrorValue::new("boom")).to_display_string(), "Error: boom");
        assert_eq!(Value::Map(Vec::new()).to_display_string(), "[object Map]");
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            Value::Date(date).to_display_string(),
            "Tue Jan 02 2024 03:04:05 GMT+0000 (Coordinated Universal Time)"
        );
    }

    #[cfg(feature = "web")]
    #[test]
    fn search_params_serialize_form_encoded() {
        let params = Value::UrlSearchParams(vec![
            ("q".to_string(), "a b".to_string()),
            ("lang".to_string(), "en&fr".to_string()),
        ]);
        assert_eq!(params.to_display_string(), "q=a+b&lang=en%26fr");
    }

    #[test]
    fn truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::from(0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::BigInt(0).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Array(Vec::new()).is_truthy());
        assert!(Value::object(Vec::<(String, Value)>::new()).is_truthy());
    }
}
