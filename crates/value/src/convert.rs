//! Conversions between [`Value`] and `serde_json`.
//!
//! JSON has no binary or opaque shapes, so the outbound direction follows
//! `JSON.stringify`: a binary buffer becomes an object keyed by byte index,
//! an opaque handle becomes `{}`, and non-finite numbers become `null`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::{Map, Value};

/// Largest integer an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn as_safe_integer(n: f64) -> Option<i64> {
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if let Some(i) = as_safe_integer(n) {
        return serde_json::Value::from(i);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(key, val)| (key.clone(), serde_json::Value::from(val)))
                    .collect(),
            ),
            Value::Binary(bytes) => serde_json::Value::Object(
                bytes
                    .iter()
                    .enumerate()
                    .map(|(i, byte)| (i.to_string(), serde_json::Value::from(*byte)))
                    .collect(),
            ),
            Value::Opaque(_) => serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match as_safe_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None if n.is_finite() => serializer.serialize_f64(*n),
                None => serializer.serialize_unit(),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, val) in map {
                    out.serialize_entry(key, val)?;
                }
                out.end()
            }
            Value::Binary(bytes) => {
                let mut out = serializer.serialize_map(Some(bytes.len()))?;
                for (i, byte) in bytes.iter().enumerate() {
                    out.serialize_entry(&i.to_string(), byte)?;
                }
                out.end()
            }
            Value::Opaque(_) => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
