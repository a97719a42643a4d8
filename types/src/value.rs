//! Dynamic runtime values.
//!
//! [`Value`] is the "value of unknown origin" every predicate and conversion
//! in primkit accepts. Its variants mirror the runtime kinds the type guards
//! distinguish, including host objects that only exist in some environments
//! (see the `web` and `node` cargo features).

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use regex::Regex;

/// String-keyed, insertion-ordered property bag backing [`Value::Object`].
pub type Object = IndexMap<String, Value>;

/// Result of the `typeof` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOf {
    Undefined,
    Object,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Function,
}

impl TypeOf {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeOf::Undefined => "undefined",
            TypeOf::Object => "object",
            TypeOf::Boolean => "boolean",
            TypeOf::Number => "number",
            TypeOf::BigInt => "bigint",
            TypeOf::String => "string",
            TypeOf::Symbol => "symbol",
            TypeOf::Function => "function",
        }
    }

    /// Parse a `typeof` name. Names are case-sensitive.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "undefined" => Some(TypeOf::Undefined),
            "object" => Some(TypeOf::Object),
            "boolean" => Some(TypeOf::Boolean),
            "number" => Some(TypeOf::Number),
            "bigint" => Some(TypeOf::BigInt),
            "string" => Some(TypeOf::String),
            "symbol" => Some(TypeOf::Symbol),
            "function" => Some(TypeOf::Function),
            _ => None,
        }
    }
}

impl fmt::Display for TypeOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity token for reference-typed values.
///
/// Two handles are equal only if one was cloned from the other.
#[derive(Debug, Clone, Default)]
pub struct Handle(Arc<()>);

impl Handle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Handle {}

/// A unique symbol with an optional description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    description: Option<String>,
    handle: Handle,
}

impl Symbol {
    #[must_use]
    pub fn new(description: Option<&str>) -> Self {
        Self {
            description: description.map(str::to_string),
            handle: Handle::new(),
        }
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

type NativeFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value with a declared arity.
///
/// The arity is what condition dispatch inspects to decide whether a
/// function receives a whole collection or is compared by identity.
#[derive(Clone)]
pub struct Function {
    name: Option<String>,
    arity: usize,
    call: Arc<NativeFn>,
}

impl Function {
    pub fn new<F>(arity: usize, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            arity,
            call: Arc::new(call),
        }
    }

    pub fn named<F>(name: impl Into<String>, arity: usize, call: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(arity, call)
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invoke the function. Missing arguments are the caller's business.
    #[must_use]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.call)(args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.call, &other.call)
    }
}

/// A thrown-error object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorValue {
    pub name: String,
    pub message: String,
}

impl ErrorValue {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            name: "Error".to_string(),
            message: message.into(),
        }
    }
}

/// Immutable binary payload with a MIME type.
#[cfg(feature = "web")]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// A named [`Blob`].
#[cfg(feature = "web")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    pub blob: Blob,
}

/// A dynamically typed value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Function(Function),
    Array(Vec<Value>),
    Object(Object),
    Date(DateTime<Utc>),
    RegExp(Regex),
    Map(Vec<(Value, Value)>),
    Set(Vec<Value>),
    WeakMap(Handle),
    WeakSet(Handle),
    Error(ErrorValue),
    Promise(Handle),
    ArrayBuffer(Vec<u8>),
    DataView(Vec<u8>),
    Uint8Array(Vec<u8>),
    #[cfg(feature = "web")]
    Blob(Blob),
    #[cfg(feature = "web")]
    File(File),
    #[cfg(feature = "web")]
    FormData(Vec<(String, Value)>),
    #[cfg(feature = "web")]
    UrlSearchParams(Vec<(String, String)>),
    #[cfg(feature = "node")]
    Buffer(Vec<u8>),
}

impl Value {
    /// Build an array from anything convertible into values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// Build a plain object from key/value pairs, keeping their order.
    pub fn object<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    #[must_use]
    pub fn type_of(&self) -> TypeOf {
        match self {
            Value::Undefined => TypeOf::Undefined,
            Value::Bool(_) => TypeOf::Boolean,
            Value::Number(_) => TypeOf::Number,
            Value::BigInt(_) => TypeOf::BigInt,
            Value::String(_) => TypeOf::String,
            Value::Symbol(_) => TypeOf::Symbol,
            Value::Function(_) => TypeOf::Function,
            _ => TypeOf::Object,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Membership equality used by collection lookups.
    ///
    /// Like `==` except that `NaN` equals `NaN`.
    #[must_use]
    pub fn same_value_zero(&self, other: &Value) -> bool {
        self.equals(other, true)
    }

    fn equals(&self, other: &Value, nan_equal: bool) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (nan_equal && a.is_nan() && b.is_nan()),
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y, nan_equal))
            }
            (Value::Object(a), Value::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.equals(vb, nan_equal))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b).all(|((ka, va), (kb, vb))| {
                        ka.equals(kb, nan_equal) && va.equals(vb, nan_equal)
                    })
            }
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::RegExp(a), Value::RegExp(b)) => a.as_str() == b.as_str(),
            (Value::WeakMap(a), Value::WeakMap(b))
            | (Value::WeakSet(a), Value::WeakSet(b))
            | (Value::Promise(a), Value::Promise(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::ArrayBuffer(a), Value::ArrayBuffer(b))
            | (Value::DataView(a), Value::DataView(b))
            | (Value::Uint8Array(a), Value::Uint8Array(b)) => a == b,
            #[cfg(feature = "web")]
            (Value::Blob(a), Value::Blob(b)) => a == b,
            #[cfg(feature = "web")]
            (Value::File(a), Value::File(b)) => a == b,
            #[cfg(feature = "web")]
            (Value::FormData(a), Value::FormData(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.equals(vb, nan_equal))
            }
            #[cfg(feature = "web")]
            (Value::UrlSearchParams(a), Value::UrlSearchParams(b)) => a == b,
            #[cfg(feature = "node")]
            (Value::Buffer(a), Value::Buffer(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality; numbers compare with `==`, so `NaN != NaN`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, false)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Regex> for Value {
    fn from(value: Regex) -> Self {
        Value::RegExp(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Value::Symbol(value)
    }
}

impl From<ErrorValue> for Value {
    fn from(value: ErrorValue) -> Self {
        Value::Error(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}
