//! The JSON value algebra: construction, access, mutation and rendering.
//!
//! Two surface quirks are kept on purpose and covered by tests:
//!
//! - `Value::Null` serializes as the *string* `"null"`, not the `null` literal.
//! - The string `"null"` decodes back to `Value::Null`, so a `String("null")`
//!   does not survive a text round trip.
//!
//! Mutation never fails. Writing a key into anything but an `Object`, or
//! appending to anything but an `Array`, is silently ignored.

use crate::any::AnyValue;
use crate::de;
use crate::error::Result;
use crate::native::{Native, NativeMap};
use crate::number::Number;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::ops::Index;

/// Object payload. Key order is preserved for rendering but ignored by equality.
pub type Map = IndexMap<String, Value>;

static NULL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    String(String),
    Number(Number),
    Object(Map),
    Array(Vec<Value>),
    Bool(bool),
    #[default]
    Null,
}

impl Value {
    /// Parse JSON text, returning `Null` on any failure.
    pub fn from_text(text: &str) -> Value {
        match Value::parse(text) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "discarding unparseable JSON text");
                Value::Null
            }
        }
    }

    /// Parse JSON text, surfacing the error and its path.
    pub fn parse(text: &str) -> Result<Value> {
        de::from_str_with_path(text)
    }

    /// Build a Value from anything serde can serialize, by way of its JSON text.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
        let text = de::to_string_with_path(value)?;
        de::from_str_with_path(&text)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Keyed read. `Null` for a missing key or a non-object.
    pub fn get(&self, key: &str) -> &Value {
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&NULL),
            _ => &NULL,
        }
    }

    /// Keyed upsert. Ignored unless `self` is an `Object`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if let Value::Object(map) = self {
            map.insert(key.into(), value.into());
        }
    }

    /// Indexed write. Ignored unless `self` is an `Array`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is an `Array` and `index` is out of bounds.
    pub fn set_index(&mut self, index: usize, value: impl Into<Value>) {
        if let Value::Array(items) = self {
            items[index] = value.into();
        }
    }

    /// Mutable keyed access for in-place edits of a nested slot.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    pub fn append(&mut self, value: impl Into<Value>) {
        if let Value::Array(items) = self {
            items.push(value.into());
        }
    }

    pub fn remove(&mut self, key: &str) {
        if let Value::Object(map) = self {
            map.shift_remove(key);
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is an `Array` and `index` is out of bounds.
    pub fn remove_index(&mut self, index: usize) {
        if let Value::Array(items) = self {
            items.remove(index);
        }
    }

    /// Visit each entry of an `Object` as `(key, native)`; no-op otherwise.
    pub fn for_each_entry(&self, mut f: impl FnMut(&str, Native)) {
        if let Value::Object(map) = self {
            for (key, value) in map {
                f(key, value.to_native());
            }
        }
    }

    /// Visit each element of an `Array` as a native value; no-op otherwise.
    pub fn for_each_element(&self, mut f: impl FnMut(Native)) {
        if let Value::Array(items) = self {
            for value in items {
                f(value.to_native());
            }
        }
    }

    /// Fully unwrapped host form. `Null` projects to the string `"null"`.
    pub fn to_native(&self) -> Native {
        match self {
            Value::String(s) => Native::String(s.clone()),
            Value::Number(n) => n.value(),
            Value::Object(map) => Native::Object(
                map.iter()
                    .map(|(key, value)| (key.clone(), value.to_native()))
                    .collect(),
            ),
            Value::Array(items) => Native::Array(items.iter().map(Value::to_native).collect()),
            Value::Bool(b) => Native::Bool(*b),
            Value::Null => Native::String("null".to_string()),
        }
    }

    /// Native mapping for an `Object`, empty for every other variant.
    pub fn to_dictionary(&self) -> NativeMap {
        match self.to_native() {
            Native::Object(map) => map,
            _ => NativeMap::new(),
        }
    }

    /// Native sequence for an `Array`, empty for every other variant.
    pub fn to_array(&self) -> Vec<Native> {
        match self.to_native() {
            Native::Array(items) => items,
            _ => Vec::new(),
        }
    }

    /// Canonical text.
    ///
    /// Strings render raw (no quotes), numbers via [`Number::string`],
    /// containers as compact JSON, and `Null` as the bare word `null`.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.string(),
            Value::Object(_) | Value::Array(_) => serde_json::to_string(self).unwrap_or_default(),
            Value::Bool(b) => b.to_string(),
            Value::Null => "null".to_string(),
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }

    /// Two-space indented JSON, for humans only.
    pub fn to_pretty_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "null".to_string())
    }
}

/// Compact JSON text for an object payload.
pub fn object_text(map: &Map) -> String {
    serde_json::to_string(map).unwrap_or_default()
}

/// Compact JSON text for an array payload.
pub fn array_text(items: &[Value]) -> String {
    serde_json::to_string(items).unwrap_or_default()
}

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// `Null` for a non-array.
    ///
    /// # Panics
    ///
    /// Panics if `self` is an `Array` and `index` is out of bounds.
    fn index(&self, index: usize) -> &Value {
        match self {
            Value::Array(items) => &items[index],
            _ => &NULL,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pretty_text())
    }
}

impl From<Native> for Value {
    fn from(native: Native) -> Self {
        match native {
            Native::Float(f) => Value::Number(Number::Float(f)),
            Native::Int(i) => Value::Number(Number::Int(i)),
            Native::Double(d) => Value::Number(Number::Double(d)),
            Native::Number(n) => Value::Number(n),
            Native::String(s) => Value::String(s),
            Native::Bool(b) => Value::Bool(b),
            Native::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Native::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
            Native::Value(value) => value,
            Native::Any(any) => Value::from(any.into_native()),
            Native::Unit => Value::Null,
        }
    }
}

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Number(Number::Int(i64::from(v)))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(Number::Float(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::Double(v))
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Object(v)
    }
}

impl From<NativeMap> for Value {
    fn from(v: NativeMap) -> Self {
        Value::from(Native::Object(v))
    }
}

impl From<AnyValue> for Value {
    fn from(v: AnyValue) -> Self {
        Value::from(Native::Any(v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<V: Into<Value>> FromIterator<V> for Value {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}
