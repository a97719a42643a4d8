//! Numeric text parsing and fixed-point rendering.
//!
//! Two parsing modes exist. The prefix parsers read as much of a leading
//! number as they can and ignore the rest (`"12px"` is 12). The coercion
//! parser accepts the whole trimmed text or nothing (`"12px"` is NaN).

use std::sync::OnceLock;

use primkit_types::{MAX_FRACTION_DIGITS, format_number};
use regex::Regex;

static NUMBER_SYNTAX: OnceLock<NumberSyntax> = OnceLock::new();

fn number_syntax() -> &'static NumberSyntax {
    NUMBER_SYNTAX.get_or_init(NumberSyntax::new)
}

struct NumberSyntax {
    int_prefix: Regex,
    float_prefix: Regex,
    decimal: Regex,
}

impl NumberSyntax {
    fn new() -> Self {
        Self {
            int_prefix: Regex::new(r"^[+-]?[0-9]+").expect("valid integer prefix regex"),
            float_prefix: Regex::new(
                r"^[+-]?(?:Infinity|[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)",
            )
            .expect("valid float prefix regex"),
            decimal: Regex::new(
                r"^[+-]?(?:Infinity|[0-9]+\.?[0-9]*(?:[eE][+-]?[0-9]+)?|\.[0-9]+(?:[eE][+-]?[0-9]+)?)$",
            )
            .expect("valid decimal literal regex"),
        }
    }
}

/// Whitespace as numeric parsing sees it: the `Zs` space separators, tab,
/// vertical tab, form feed, the BOM and the four line terminators. `U+0085`
/// is not in the set.
fn is_number_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Parse a matched decimal literal. The grammar above only admits text
/// that `f64::from_str` understands once `Infinity` is spelled `inf`.
fn parse_decimal(literal: &str) -> f64 {
    let (negative, body) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else {
        body.parse().unwrap_or(f64::NAN)
    };
    if negative { -magnitude } else { magnitude }
}

/// Leading base-10 integer, or NaN when there is none.
pub(crate) fn parse_int_prefix(text: &str) -> f64 {
    let text = text.trim_start_matches(is_number_space);
    number_syntax()
        .int_prefix
        .find(text)
        .map_or(f64::NAN, |m| parse_decimal(m.as_str()))
}

/// Leading decimal literal (with `Infinity` and exponents), or NaN.
pub(crate) fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start_matches(is_number_space);
    number_syntax()
        .float_prefix
        .find(text)
        .map_or(f64::NAN, |m| parse_decimal(m.as_str()))
}

/// Whole-text numeric coercion.
///
/// Blank text is 0. `0x`, `0o` and `0b` prefixes select a radix (unsigned
/// only). Otherwise the trimmed text must be a complete decimal literal.
pub(crate) fn coerce_number(text: &str) -> f64 {
    let text = text.trim_matches(is_number_space);
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix(&text[2..], radix);
    }

    if number_syntax().decimal.is_match(text) {
        parse_decimal(text)
    } else {
        f64::NAN
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut total = 0.0_f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return f64::NAN;
        };
        total = total * f64::from(radix) + f64::from(digit);
    }
    total
}

/// Fixed-point rendering with `digits` fractional digits.
///
/// Rounds the exact binary value half away from zero, so `2.5` gives `"3"`
/// but `1.005` (stored just below) gives `"1.00"`. `digits` is clamped to
/// [`MAX_FRACTION_DIGITS`]. Magnitudes of `1e21` and beyond, and non-finite
/// values, fall back to the display form.
pub(crate) fn to_fixed(n: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FRACTION_DIGITS);
    if !n.is_finite() || n.abs() >= 1e21 {
        return format_number(n);
    }

    // Every finite f64 has an exact decimal expansion of at most 1074
    // fractional digits, so this renders without rounding.
    let exact = format!("{:.1100}", n.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');
    if round_up {
        increment_decimal(&mut kept);
    }

    let int_len = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if n < 0.0 {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&kept[..int_len]));
    if digits > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&kept[int_len..]));
    }
    out
}

/// Add one unit in the last place to a run of ASCII digits.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
