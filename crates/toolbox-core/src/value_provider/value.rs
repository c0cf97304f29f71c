use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::Serialize;

use crate::time_format::parse_time;

// Fallback text layouts tried by `Value::as_time`, after RFC 3339
const TIME_PATTERNS: &[&str] = &["yyyy-MM-dd HH:mm:ss", "yyyy-MM-dd'T'HH:mm:ss", "yyyy-MM-dd"];

/// A dynamically typed value passed to and returned from value providers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Time(DateTime<FixedOffset>),
    /// Arrays and objects carried over from JSON-like sources
    Json(serde_json::Value),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text form of the value; null becomes the empty string
    pub fn as_string(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::Time(t) => t.to_rfc3339(),
            Value::Json(serde_json::Value::String(s)) => s.clone(),
            Value::Json(json) => json.to_string(),
        }
    }

    /// Best-effort integer conversion; anything unconvertible is 0
    pub fn as_int(&self) -> i64 {
        match self {
            Value::Null => 0,
            Value::Bool(b) => i64::from(*b),
            Value::Int(i) => *i,
            Value::Float(f) => *f as i64,
            Value::String(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                    .unwrap_or(0)
            }
            Value::Time(t) => t.timestamp(),
            Value::Json(json) => Self::scalar(json).map(|v| v.as_int()).unwrap_or(0),
        }
    }

    /// Best-effort float conversion; anything unconvertible is 0.0
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Int(i) => *i as f64,
            Value::Float(f) => *f,
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Value::Time(t) => t.timestamp() as f64,
            Value::Json(json) => Self::scalar(json).map(|v| v.as_float()).unwrap_or(0.0),
        }
    }

    /// Best-effort boolean conversion: `1`, `t` and `true` (any case) are true
    pub fn as_bool(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "t" | "true"),
            Value::Json(json) => Self::scalar(json).map(|v| v.as_bool()).unwrap_or(false),
            Value::Null | Value::Time(_) => false,
        }
    }

    /// Interpret the value as a point in time.
    ///
    /// Strings are tried as RFC 3339 and then a few common date patterns;
    /// integers are read as Unix seconds.
    pub fn as_time(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Value::Time(t) => Some(*t),
            Value::Int(secs) => DateTime::<Utc>::from_timestamp(*secs, 0).map(|t| t.with_timezone(&Utc.fix())),
            Value::String(s) => {
                let s = s.trim();
                DateTime::parse_from_rfc3339(s)
                    .ok()
                    .or_else(|| TIME_PATTERNS.iter().find_map(|p| parse_time(p, s).ok()))
            }
            _ => None,
        }
    }

    fn scalar(json: &serde_json::Value) -> Option<Value> {
        match Value::from(json.clone()) {
            Value::Json(_) => None,
            scalar => Some(scalar),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            other => write!(f, "{}", other.as_string()),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
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

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Time(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value.with_timezone(&Utc.fix()))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(0.0)),
            },
            serde_json::Value::String(s) => Value::String(s),
            composite => Value::Json(composite),
        }
    }
}
