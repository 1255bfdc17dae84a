//! Structured values passed as template arguments.
//!
//! `Value` is a closed set of kinds; the pretty-printer and the JSON
//! formatter pattern-match on it instead of inspecting runtime types.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// A template argument or a nested element of one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value at all (a placeholder with nothing bound to it)
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    BigInt(i128),
    /// Floating point number
    Number(f64),
    String(String),
    /// A symbol, identified by its description
    Symbol(String),
    /// A callable, identified by its name
    Function(String),
    Date(DateTime<Utc>),
    Exception { name: String, message: String },
    Array(Vec<Value>),
    Object(ValueMap),
}

impl Value {
    pub fn function<S: Into<String>>(name: S) -> Self {
        Value::Function(name.into())
    }

    pub fn symbol<S: Into<String>>(description: S) -> Self {
        Value::Symbol(description.into())
    }

    pub fn exception<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Value::Exception {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wrap any Rust error as an exception value.
    pub fn error(err: &dyn std::error::Error) -> Self {
        Value::exception("Error", err.to_string())
    }

    pub fn date<Tz: TimeZone>(date: DateTime<Tz>) -> Self {
        Value::Date(date.with_timezone(&Utc))
    }

    /// Build an object from key/value pairs, keeping their order.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(entries.into_iter().collect())
    }

    /// Convert any serializable value through its JSON representation.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> crate::error::Result<Self> {
        Ok(serde_json::to_value(value)?.into())
    }

    /// Kind name used by color palettes and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::BigInt(_) => "bigint",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Date(_) => "date",
            Value::Exception { .. } => "exception",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Plain text of a scalar, without quoting or color.
    ///
    /// Arrays and objects have no scalar text and return `None`.
    pub fn scalar_text(&self) -> Option<String> {
        let text = match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::BigInt(i) => i.to_string(),
            Value::Number(n) => number_text(*n),
            Value::String(s) => s.clone(),
            Value::Symbol(description) => format!("Symbol({})", description),
            Value::Function(name) if name.is_empty() => "anonymous".to_string(),
            Value::Function(name) => name.clone(),
            Value::Date(date) => rfc3339(date),
            Value::Exception { name, message } => format!("{}: {}", name, message),
            Value::Array(_) | Value::Object(_) => return None,
        };
        Some(text)
    }

    /// JSON text of this value, as written by the JSON formatter.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

/// 整数值且在 ±2^53 内的浮点数按整数写出（`2.0` → `2`）
fn is_safe_integer(n: f64) -> bool {
    const MAX_SAFE: f64 = 9_007_199_254_740_992.0;
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE
}

fn rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null | Value::Symbol(_) | Value::Function(_) => {
                serializer.serialize_unit()
            }
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::BigInt(i) => serializer.serialize_i128(*i),
            Value::Number(n) if is_safe_integer(*n) => serializer.serialize_i64(*n as i64),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(date) => serializer.serialize_str(&rfc3339(date)),
            Value::Exception { name, message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => map.serialize(serializer),
        }
    }
}

/// Insertion-ordered string-keyed map.
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap {
    entries: Vec<(String, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert<K: Into<String>>(&mut self, key: K, value: Value) -> Option<Value> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (key, value) in iter {
            map.insert(key, value.into());
        }
        map
    }
}

impl Serialize for ValueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Integer(i as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(i: u64) -> Self {
        i64::try_from(i).map_or(Value::BigInt(i as i128), Value::Integer)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::from(i as u64)
    }
}

impl From<i128> for Value {
    fn from(i: i128) -> Self {
        Value::BigInt(i)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::from(items),
            serde_json::Value::Object(map) => Value::Object(map.into_iter().collect()),
        }
    }
}

/// Convert a list of heterogeneous values into a `[Value; N]` argument list.
///
/// ```
/// use knight_log::{args, Value};
///
/// let values = args!["My message", 1337];
/// assert_eq!(values[1], Value::Integer(1337));
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::from($value)),*]
    };
}

/// Build a `Value::Array` from heterogeneous values.
#[macro_export]
macro_rules! array {
    ($($value:expr),* $(,)?) => {
        $crate::Value::Array(vec![$($crate::Value::from($value)),*])
    };
}

/// Build a `Value::Object`, keeping key order.
///
/// ```
/// use knight_log::object;
///
/// let value = object! { "foo" => "bar", "baz" => "qux" };
/// assert_eq!(value.kind(), "object");
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Value::Object($crate::ValueMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ValueMap::new();
        $( map.insert($key, $crate::Value::from($value)); )+
        $crate::Value::Object(map)
    }};
}
