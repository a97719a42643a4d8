//! Bridging between [`Value`] and `serde_json`.
//!
//! Serialization follows the runtime's `JSON.stringify` rules rather than a
//! lossless encoding: values with no JSON form are dropped from objects and
//! become `null` inside arrays, and host objects without enumerable data
//! serialize as `{}`.

use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as Json};
use thiserror::Error;

use crate::value::{Object, Value};

/// Largest integer that survives an `f64` round trip.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsonError {
    #[error("BigInt value can't be serialized in JSON")]
    BigInt,
}

fn number_to_json(n: f64) -> Json {
    if !n.is_finite() {
        return Json::Null;
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Json::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

fn bytes_to_indexed(bytes: &[u8]) -> Json {
    Json::Object(
        bytes
            .iter()
            .enumerate()
            .map(|(index, byte)| (index.to_string(), Json::from(*byte)))
            .collect(),
    )
}

impl Value {
    /// Serialize to JSON.
    ///
    /// Returns `Ok(None)` for values that have no JSON form (`undefined`,
    /// functions, symbols); containers decide what to do with them.
    pub fn to_json(&self) -> Result<Option<Json>, JsonError> {
        let json = match self {
            Value::Undefined | Value::Function(_) | Value::Symbol(_) => return Ok(None),
            Value::BigInt(_) => return Err(JsonError::BigInt),
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_json()?.unwrap_or(Json::Null));
                }
                Json::Array(out)
            }
            Value::Object(object) => {
                let mut out = Map::new();
                for (key, value) in object {
                    if let Some(json) = value.to_json()? {
                        out.insert(key.clone(), json);
                    }
                }
                Json::Object(out)
            }
            Value::Date(date) => Json::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Uint8Array(bytes) => bytes_to_indexed(bytes),
            #[cfg(feature = "node")]
            Value::Buffer(bytes) => {
                let mut out = Map::new();
                out.insert("type".to_string(), Json::from("Buffer"));
                out.insert(
                    "data".to_string(),
                    Json::Array(bytes.iter().map(|b| Json::from(*b)).collect()),
                );
                Json::Object(out)
            }
            _ => Json::Object(Map::new()),
        };
        Ok(Some(json))
    }
}

/// Literals too large for `f64` (`1e400`) become infinities.
fn number_from_json(n: &Number) -> f64 {
    n.as_f64()
        .unwrap_or_else(|| n.to_string().parse().unwrap_or(f64::NAN))
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(number_from_json(&n)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Object>(),
            ),
        }
    }
}
