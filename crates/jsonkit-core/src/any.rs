//! A box for untyped JSON payloads.
//!
//! [`AnyValue`] lets a `#[derive(Deserialize)]` struct carry a field whose
//! shape is unknown at compile time. Unlike [`Value`](crate::Value) it uses
//! standard JSON null semantics: `Null` is written as the `null` literal and
//! the string `"null"` stays a string.

use crate::de;
use crate::error::Result;
use crate::native::Native;
use crate::number::{integral_f64, Number};
use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AnyValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    #[default]
    Null,
    Array(Vec<AnyValue>),
    Object(IndexMap<String, AnyValue>),
}

impl AnyValue {
    /// Decode JSON text, reporting the path of the first unclassifiable node.
    pub fn from_text(text: &str) -> Result<AnyValue> {
        de::from_str_with_path(text)
    }

    /// Encode to compact JSON text, reporting the path of the first value that
    /// has no JSON form.
    pub fn to_text(&self) -> Result<String> {
        de::to_string_with_path(self)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnyValue::Null)
    }

    /// Host form. The null marker becomes [`Native::Unit`].
    pub fn into_native(self) -> Native {
        match self {
            AnyValue::Bool(b) => Native::Bool(b),
            AnyValue::Int(i) => Native::Int(i),
            AnyValue::Double(d) => Native::Double(d),
            AnyValue::String(s) => Native::String(s),
            AnyValue::Null => Native::Unit,
            AnyValue::Array(items) => {
                Native::Array(items.into_iter().map(AnyValue::into_native).collect())
            }
            AnyValue::Object(map) => Native::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_native()))
                    .collect(),
            ),
        }
    }
}

impl From<Number> for AnyValue {
    fn from(n: Number) -> Self {
        match n {
            Number::Int(i) => AnyValue::Int(i),
            Number::Float(f) => AnyValue::Double(f64::from(f)),
            Number::Double(d) => AnyValue::Double(d),
        }
    }
}

impl From<bool> for AnyValue {
    fn from(b: bool) -> Self {
        AnyValue::Bool(b)
    }
}

impl From<i64> for AnyValue {
    fn from(i: i64) -> Self {
        AnyValue::Int(i)
    }
}

impl From<f64> for AnyValue {
    fn from(d: f64) -> Self {
        AnyValue::Double(d)
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        AnyValue::String(s.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(s: String) -> Self {
        AnyValue::String(s)
    }
}

impl From<Vec<AnyValue>> for AnyValue {
    fn from(items: Vec<AnyValue>) -> Self {
        AnyValue::Array(items)
    }
}

impl From<IndexMap<String, AnyValue>> for AnyValue {
    fn from(map: IndexMap<String, AnyValue>) -> Self {
        AnyValue::Object(map)
    }
}

impl Serialize for AnyValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AnyValue::Bool(b) => serializer.serialize_bool(*b),
            AnyValue::Int(i) => serializer.serialize_i64(*i),
            AnyValue::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            AnyValue::Double(d) => Err(S::Error::custom(format!(
                "cannot encode {d} as a JSON number"
            ))),
            AnyValue::String(s) => serializer.serialize_str(s),
            AnyValue::Null => serializer.serialize_unit(),
            AnyValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AnyValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

struct AnyValueVisitor;

impl<'de> Visitor<'de> for AnyValueVisitor {
    type Value = AnyValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bool, integer, double, string, null, array or object")
    }

    fn visit_bool<E>(self, b: bool) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Bool(b))
    }

    fn visit_i64<E>(self, i: i64) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Int(i))
    }

    fn visit_u64<E>(self, u: u64) -> std::result::Result<AnyValue, E> {
        Ok(i64::try_from(u).map_or(AnyValue::Double(u as f64), AnyValue::Int))
    }

    /// A 64-bit integer read wins over a double whenever the number is integral.
    fn visit_f64<E>(self, d: f64) -> std::result::Result<AnyValue, E> {
        Ok(integral_f64(d).map_or(AnyValue::Double(d), AnyValue::Int))
    }

    fn visit_str<E>(self, s: &str) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::String(s.to_string()))
    }

    fn visit_string<E>(self, s: String) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::String(s))
    }

    fn visit_unit<E>(self) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<AnyValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> std::result::Result<AnyValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(AnyValue::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<AnyValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = IndexMap::new();
        while let Some((key, value)) = access.next_entry::<String, AnyValue>()? {
            map.insert(key, value);
        }
        Ok(AnyValue::Object(map))
    }
}

impl<'de> Deserialize<'de> for AnyValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AnyValueVisitor)
    }
}
