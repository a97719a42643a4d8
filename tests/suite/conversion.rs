//! Settings-aware conversions and failure reporting

use chrono::{Datelike, Timelike};
use primkit_types::{ConvertSettings, Value};
use primkit_utils::{
    Converter, SilentDiagnostics, array_to_string, number_to_fixed, string_to_array,
    string_to_boolean,
};
use serde_json::json;

use crate::common::{RecordingDiagnostics, json, recording_converter};

fn settings(raw: serde_json::Value) -> ConvertSettings {
    serde_json::from_value(raw).unwrap()
}

#[test]
fn unknown_boolean_is_reported() {
    let diagnostics = RecordingDiagnostics::default();
    let converter = recording_converter(&diagnostics);

    assert_eq!(converter.string_to_boolean("maybe"), None);
    assert_eq!(diagnostics.messages(), ["Invalid boolean string: maybe"]);
    assert_eq!(diagnostics.reports()[0].kind, "boolean");
}

#[test]
fn each_parser_reports_its_own_failure() {
    let diagnostics = RecordingDiagnostics::default();
    let converter = recording_converter(&diagnostics);

    assert_eq!(converter.string_to_number("12abc"), None);
    assert_eq!(converter.string_to_date("not a date"), None);
    assert_eq!(converter.string_to_json("{oops"), None);
    assert_eq!(converter.array_to_json(&Value::array([Value::BigInt(1)])), "");

    let kinds: Vec<_> = diagnostics.reports().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, ["number", "date", "json", "serialize"]);
    insta::assert_snapshot!(diagnostics.messages().join("\n"), @r"
    Invalid number string: 12abc
    Invalid date: not a date
    Invalid JSON string: {oops
    value can't be serialized: BigInt value can't be serialized in JSON
    ");
}

#[test]
fn successful_conversions_report_nothing() {
    let diagnostics = RecordingDiagnostics::default();
    let converter = recording_converter(&diagnostics);

    assert_eq!(converter.string_to_number(" 0x1F "), Some(31.0));
    assert_eq!(converter.string_to_number(""), Some(0.0));
    assert_eq!(converter.string_to_boolean("YES"), Some(true));
    assert_eq!(converter.string_to_boolean("Off"), Some(false));
    assert_eq!(converter.string_to_json("[1,{\"a\":null}]"), Some(json(r#"[1,{"a":null}]"#)));
    assert_eq!(converter.string_to_json("3"), Some(Value::from(3)));

    let date = converter.string_to_date("2024-02-29 13:45").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 29));
    assert_eq!((date.hour(), date.minute()), (13, 45));

    assert!(diagnostics.is_empty());
}

#[test]
fn custom_keywords_replace_the_defaults() {
    let diagnostics = RecordingDiagnostics::default();
    let converter = Converter::with_diagnostics(
        settings(json!({ "truthy": ["Ja", "Si"], "falsy": ["nein"] })),
        &diagnostics,
    );

    assert_eq!(converter.string_to_boolean("ja"), Some(true));
    assert_eq!(converter.string_to_boolean("SI"), Some(true));
    assert_eq!(converter.string_to_boolean("Nein"), Some(false));
    assert_eq!(converter.string_to_boolean("true"), None);
    assert_eq!(diagnostics.messages(), ["Invalid boolean string: true"]);
}

#[test]
fn custom_separator_and_delimiter() {
    let converter = Converter::with_diagnostics(
        settings(json!({ "separator": " / ", "delimiter": ";" })),
        SilentDiagnostics,
    );

    assert_eq!(converter.array_to_string(&Value::array(["a", "b", "c"])), "a / b / c");
    assert_eq!(converter.array_to_string(&Value::from("abc")), "");
    assert_eq!(converter.string_to_array("x;y;;z"), ["x", "y", "", "z"]);
    assert_eq!(converter.string_to_array("x,y"), ["x,y"]);
}

#[test]
fn custom_digits() {
    let converter = Converter::with_diagnostics(
        settings(json!({ "fixed_digits": 4, "percent_digits": 1 })),
        SilentDiagnostics,
    );

    assert_eq!(converter.number_to_fixed(&Value::from(2.5)), "2.5000");
    assert_eq!(converter.number_to_fixed(&Value::from("pi")), "0.0000");
    assert_eq!(converter.number_to_percent(&Value::from(0.5)), "50.0%");
}

#[test]
fn default_converter_matches_free_functions() {
    let converter = Converter::with_diagnostics(ConvertSettings::default(), SilentDiagnostics);
    let items = Value::array([1, 2, 3]);

    assert_eq!(converter.array_to_string(&items), array_to_string(&items, None));
    assert_eq!(converter.string_to_array("a,b"), string_to_array("a,b", None));
    assert_eq!(
        converter.number_to_fixed(&Value::from(1.005)),
        number_to_fixed(&Value::from(1.005), None)
    );
    assert_eq!(
        converter.string_to_boolean("on"),
        string_to_boolean("on")
    );
}

#[test]
fn invalid_settings_are_rejected() {
    let overlap = serde_json::from_value::<ConvertSettings>(json!({
        "truthy": ["on"],
        "falsy": ["ON"],
    }));
    insta::assert_snapshot!(
        overlap.unwrap_err().to_string(),
        @r#"keyword "on" is listed as both truthy and falsy"#
    );

    let empty = serde_json::from_value::<ConvertSettings>(json!({ "falsy": [] }));
    assert!(empty.is_err());

    let digits = serde_json::from_value::<ConvertSettings>(json!({ "percent_digits": 101 }));
    assert!(digits.is_err());

    let unknown = serde_json::from_value::<ConvertSettings>(json!({ "rounding": "up" }));
    assert!(unknown.is_err());
}
