//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use primkit_types::{ConvertSettings, Value};
use primkit_utils::{ConversionError, Converter, Diagnostics};

/// Diagnostics sink that keeps every report for later assertions.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    reports: RefCell<Vec<Report>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: &'static str,
    pub message: String,
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, error: &ConversionError) {
        self.reports.borrow_mut().push(Report {
            kind: error.kind(),
            message: error.to_string(),
        });
    }
}

impl RecordingDiagnostics {
    pub fn reports(&self) -> Vec<Report> {
        self.reports.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.reports
            .borrow()
            .iter()
            .map(|report| report.message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.borrow().is_empty()
    }
}

/// A default-settings converter reporting into `diagnostics`.
pub fn recording_converter(diagnostics: &RecordingDiagnostics) -> Converter<&RecordingDiagnostics> {
    Converter::with_diagnostics(ConvertSettings::default(), diagnostics)
}

/// Parse a JSON literal into a [`Value`]. Test-only shorthand.
pub fn json(text: &str) -> Value {
    Value::from(serde_json::from_str::<serde_json::Value>(text).expect("valid JSON fixture"))
}

/// Values of every kind that are not arrays.
pub fn non_arrays() -> Vec<Value> {
    vec![
        Value::Undefined,
        Value::Null,
        Value::Bool(true),
        Value::from(0),
        Value::Number(f64::NAN),
        Value::BigInt(7),
        Value::from(""),
        Value::from("[1,2]"),
        json(r#"{"0":"a","length":1}"#),
        Value::Set(vec![Value::from(1)]),
        Value::Map(vec![(Value::from("k"), Value::from(1))]),
        Value::Uint8Array(vec![1, 2]),
    ]
}
