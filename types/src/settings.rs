//! Resolved conversion settings.
//!
//! The raw deserialization struct (all `Option` fields) stays private. It is
//! resolved into [`ConvertSettings`] at the parse boundary, so a value of
//! that type is always valid: keyword tables are non-empty, lowercased and
//! disjoint, and digit counts are in range.

use serde::Deserialize;

/// Keywords accepted as `true` by boolean parsing (case-insensitive).
pub const DEFAULT_TRUTHY: [&str; 6] = ["true", "1", "yes", "on", "ok", "success"];
/// Keywords accepted as `false` by boolean parsing (case-insensitive).
pub const DEFAULT_FALSY: [&str; 6] = ["false", "0", "no", "off", "fail", "error"];

pub const DEFAULT_SEPARATOR: &str = ",";
pub const DEFAULT_DELIMITER: &str = ",";
pub const DEFAULT_FIXED_DIGITS: usize = 2;
pub const DEFAULT_PERCENT_DIGITS: usize = 0;

/// Upper bound on fraction digits for fixed-point rendering.
pub const MAX_FRACTION_DIGITS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("{0} keyword table must not be empty")]
    EmptyKeywords(&'static str),
    #[error("keyword {0:?} is listed as both truthy and falsy")]
    OverlappingKeyword(String),
    #[error("{field} must be at most 100 (got {value})")]
    DigitsOutOfRange { field: &'static str, value: usize },
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConvertSettings {
    truthy: Option<Vec<String>>,
    falsy: Option<Vec<String>>,
    separator: Option<String>,
    delimiter: Option<String>,
    fixed_digits: Option<usize>,
    percent_digits: Option<usize>,
}

/// Validated defaults for the conversion family.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawConvertSettings")]
pub struct ConvertSettings {
    truthy: Vec<String>,
    falsy: Vec<String>,
    separator: String,
    delimiter: String,
    fixed_digits: usize,
    percent_digits: usize,
}

fn keyword_table(raw: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    match raw {
        Some(words) => words.iter().map(|w| w.trim().to_lowercase()).collect(),
        None => defaults.iter().map(|w| (*w).to_string()).collect(),
    }
}

fn check_digits(field: &'static str, value: usize) -> Result<usize, SettingsError> {
    if value > MAX_FRACTION_DIGITS {
        return Err(SettingsError::DigitsOutOfRange { field, value });
    }
    Ok(value)
}

impl TryFrom<RawConvertSettings> for ConvertSettings {
    type Error = SettingsError;

    fn try_from(raw: RawConvertSettings) -> Result<Self, Self::Error> {
        let truthy = keyword_table(raw.truthy, &DEFAULT_TRUTHY);
        let falsy = keyword_table(raw.falsy, &DEFAULT_FALSY);
        if truthy.is_empty() {
            return Err(SettingsError::EmptyKeywords("truthy"));
        }
        if falsy.is_empty() {
            return Err(SettingsError::EmptyKeywords("falsy"));
        }
        if let Some(shared) = truthy.iter().find(|word| falsy.contains(word)) {
            return Err(SettingsError::OverlappingKeyword(shared.clone()));
        }

        Ok(Self {
            truthy,
            falsy,
            separator: raw
                .separator
                .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
            delimiter: raw
                .delimiter
                .unwrap_or_else(|| DEFAULT_DELIMITER.to_string()),
            fixed_digits: check_digits(
                "fixed_digits",
                raw.fixed_digits.unwrap_or(DEFAULT_FIXED_DIGITS),
            )?,
            percent_digits: check_digits(
                "percent_digits",
                raw.percent_digits.unwrap_or(DEFAULT_PERCENT_DIGITS),
            )?,
        })
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            truthy: keyword_table(None, &DEFAULT_TRUTHY),
            falsy: keyword_table(None, &DEFAULT_FALSY),
            separator: DEFAULT_SEPARATOR.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
            fixed_digits: DEFAULT_FIXED_DIGITS,
            percent_digits: DEFAULT_PERCENT_DIGITS,
        }
    }
}

impl ConvertSettings {
    /// Resolve a boolean keyword, ignoring case. `None` if the word is in neither table.
    #[must_use]
    pub fn keyword(&self, raw: &str) -> Option<bool> {
        let lowered = raw.to_lowercase();
        if self.truthy.contains(&lowered) {
            Some(true)
        } else if self.falsy.contains(&lowered) {
            Some(false)
        } else {
            None
        }
    }

    #[must_use]
    pub fn truthy(&self) -> &[String] {
        &self.truthy
    }

    #[must_use]
    pub fn falsy(&self) -> &[String] {
        &self.falsy
    }

    /// Separator used when joining arrays into text.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Delimiter used when splitting text into arrays.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    #[must_use]
    pub const fn fixed_digits(&self) -> usize {
        self.fixed_digits
    }

    #[must_use]
    pub const fn percent_digits(&self) -> usize {
        self.percent_digits
    }
}
