//! Number family: property checks and conversions

use primkit_types::Value;
use primkit_utils::{
    Condition, add, number_has, number_is, number_is_even, number_is_odd, number_to,
    number_to_fixed, number_to_float, number_to_int, number_to_percent, number_to_self,
    subtract,
};

#[test]
fn int_round_trips_integral_numbers() {
    for n in [0.0, 7.0, -42.0, 1e15, -9_007_199_254_740_991.0] {
        let text = Value::from(Value::Number(n).to_display_string());
        assert_eq!(number_to_int(&text, None), n, "{n}");
    }
}

#[test]
fn int_falls_back_on_garbage() {
    assert_eq!(number_to_int(&Value::from("abc"), 5.0), 5.0);
    assert_eq!(number_to_int(&Value::Undefined, -1.0), -1.0);
    assert_eq!(number_to_int(&Value::from(""), None), 0.0);
}

#[test]
fn float_reads_the_leading_literal() {
    assert_eq!(number_to_float(&Value::from("  6.02e23 molecules"), None), 6.02e23);
    assert_eq!(number_to_float(&Value::from("Infinity and beyond"), None), f64::INFINITY);
    assert_eq!(number_to_float(&Value::from("-.5"), None), -0.5);
}

#[test]
fn parity_with_negative_numbers() {
    assert!(number_is_odd(&Value::from(-3)));
    assert!(number_is_odd(&Value::from(3)));
    assert!(number_is_even(&Value::from(-2)));
    assert!(!number_is_odd(&Value::from(-2)));
}

#[test]
fn is_with_predicate_and_literal() {
    let between = |n: &f64| (1.0..=10.0).contains(n);
    assert!(number_is(&Value::from(5), Condition::Predicate(&between)));
    assert!(!number_is(&Value::from(11), Condition::Predicate(&between)));
    assert!(number_is(&Value::from(5), Condition::from(5.0)));
    assert!(!number_is(&Value::from("5"), Condition::from(5.0)));
}

#[test]
fn has_looks_at_rendering() {
    assert!(number_has(&Value::from(3.75), Condition::from("75")));
    assert!(number_has(&Value::Number(1e-7), Condition::from("e-7")));
    assert!(!number_has(&Value::Number(f64::NAN), None));
}

#[test]
fn transform_and_identity() {
    assert_eq!(number_to(&Value::from(4), f64::sqrt), Some(2.0));
    assert_eq!(number_to_self(&Value::from(4)), Some(4.0));
    assert_eq!(number_to_self(&Value::Bool(true)), None);
}

#[test]
fn formatting() {
    insta::assert_snapshot!(number_to_fixed(&Value::from(1234.5678), None), @"1234.57");
    insta::assert_snapshot!(number_to_fixed(&Value::from(-1.5), 0), @"-2");
    insta::assert_snapshot!(number_to_fixed(&Value::from("x"), 3), @"0.000");
    insta::assert_snapshot!(number_to_percent(&Value::from(0.075), 1), @"7.5%");
    insta::assert_snapshot!(number_to_percent(&Value::from(1), None), @"100%");
}

#[test]
fn math_helpers() {
    assert_eq!(add(2.0, 3.0), 5.0);
    assert_eq!(subtract(2.0, 3.0), -1.0);
}
