//! The polymorphic match condition shared by every `is` / `has` function.
//!
//! A condition is resolved by its runtime shape, in a fixed order per domain:
//!
//! 1. a same-kind literal compares for equality (or membership for arrays),
//! 2. a pattern matches against the text,
//! 3. a callable is invoked and its result decides,
//! 4. anything else is "no match".
//!
//! Resolution is total: every shape maps to exactly one strategy and nothing
//! here can fail.

use std::fmt;
use std::slice;

use primkit_types::{Function, Value};
use regex::Regex;

/// Match condition for a predicate over `T`.
///
/// `T` is what a native predicate receives: `str` for strings, `f64` for
/// numbers, `[Value]` for whole-array checks and `Value` for per-element
/// checks.
pub enum Condition<'a, T: ?Sized> {
    /// A runtime value whose kind selects the strategy: strings and numbers
    /// are literals (or type names, for arrays), a `RegExp` is a pattern and a
    /// `Function` is a callable.
    Value(Value),
    /// A compiled pattern.
    Pattern(&'a Regex),
    /// A native predicate.
    Predicate(&'a dyn Fn(&T) -> bool),
}

impl<T: ?Sized> fmt::Debug for Condition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Condition::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Condition::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<T: ?Sized> Condition<'_, T> {
    /// Treat an explicit `undefined` condition the same as no condition.
    pub(crate) fn defined(condition: Option<Self>) -> Option<Self> {
        condition.filter(|c| !matches!(c, Condition::Value(Value::Undefined)))
    }
}

impl<T: ?Sized> From<Value> for Condition<'_, T> {
    fn from(value: Value) -> Self {
        Condition::Value(value)
    }
}

impl<T: ?Sized> From<&str> for Condition<'_, T> {
    fn from(value: &str) -> Self {
        Condition::Value(Value::from(value))
    }
}

impl<T: ?Sized> From<String> for Condition<'_, T> {
    fn from(value: String) -> Self {
        Condition::Value(Value::String(value))
    }
}

impl<T: ?Sized> From<f64> for Condition<'_, T> {
    fn from(value: f64) -> Self {
        Condition::Value(Value::Number(value))
    }
}

impl<T: ?Sized> From<i32> for Condition<'_, T> {
    fn from(value: i32) -> Self {
        Condition::Value(Value::from(value))
    }
}

impl<T: ?Sized> From<Function> for Condition<'_, T> {
    fn from(value: Function) -> Self {
        Condition::Value(Value::Function(value))
    }
}

impl<'a, T: ?Sized> From<&'a Regex> for Condition<'a, T> {
    fn from(value: &'a Regex) -> Self {
        Condition::Pattern(value)
    }
}

/// Invoke a runtime function with a single argument and coerce its result.
pub(crate) fn call_truthy(function: &Function, argument: &Value) -> bool {
    function.call(slice::from_ref(argument)).is_truthy()
}
