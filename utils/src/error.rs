//! Conversion failures.
//!
//! These never escape a `to*` function. They are what a [`Diagnostics`]
//! sink receives when a conversion gives up and returns its sentinel.
//!
//! [`Diagnostics`]: crate::Diagnostics

use primkit_types::JsonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Invalid boolean string: {0}")]
    InvalidBoolean(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid number string: {0}")]
    InvalidNumber(String),
    #[error("Invalid JSON string: {input}")]
    InvalidJson {
        input: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("value can't be serialized: {0}")]
    Unserializable(#[from] JsonError),
}

impl ConversionError {
    /// Short machine-friendly label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ConversionError::InvalidBoolean(_) => "boolean",
            ConversionError::InvalidDate(_) => "date",
            ConversionError::InvalidNumber(_) => "number",
            ConversionError::InvalidJson { .. } => "json",
            ConversionError::Unserializable(_) => "serialize",
        }
    }

    /// The rejected input, when the failure came from parsing text.
    #[must_use]
    pub fn input(&self) -> Option<&str> {
        match self {
            ConversionError::InvalidBoolean(input)
            | ConversionError::InvalidDate(input)
            | ConversionError::InvalidNumber(input)
            | ConversionError::InvalidJson { input, .. } => Some(input),
            ConversionError::Unserializable(_) => None,
        }
    }
}
