//! Host-side dynamic values.
//!
//! `Native` is what callers hand to [`Value::from`](crate::Value) when they
//! build a document from loose data, and what [`Value::to_native`] projects
//! back out. It is deliberately wider than [`Value`]: it can carry a
//! pre-built `Number`, a `Value`, or an [`AnyValue`] box, all of which are
//! unwrapped on conversion.

use crate::any::AnyValue;
use crate::number::Number;
use crate::value::Value;
use indexmap::IndexMap;

/// String-keyed mapping of host values.
pub type NativeMap = IndexMap<String, Native>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Native {
    /// Anything without a JSON shape. Converts to `Value::Null`.
    #[default]
    Unit,
    Float(f32),
    Int(i64),
    Double(f64),
    Number(Number),
    String(String),
    Bool(bool),
    Array(Vec<Native>),
    Object(NativeMap),
    Value(Value),
    Any(AnyValue),
}

impl Native {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&NativeMap> {
        match self {
            Native::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Native]> {
        match self {
            Native::Array(items) => Some(items),
            _ => None,
        }
    }
}

macro_rules! native_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Native {
                fn from(v: $t) -> Self {
                    Native::Int(i64::from(v))
                }
            }
        )*
    };
}

native_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Native {
    fn from(v: f32) -> Self {
        Native::Float(v)
    }
}

impl From<f64> for Native {
    fn from(v: f64) -> Self {
        Native::Double(v)
    }
}

impl From<bool> for Native {
    fn from(v: bool) -> Self {
        Native::Bool(v)
    }
}

impl From<&str> for Native {
    fn from(v: &str) -> Self {
        Native::String(v.to_string())
    }
}

impl From<String> for Native {
    fn from(v: String) -> Self {
        Native::String(v)
    }
}

impl From<Number> for Native {
    fn from(v: Number) -> Self {
        Native::Number(v)
    }
}

impl From<Value> for Native {
    fn from(v: Value) -> Self {
        Native::Value(v)
    }
}

impl From<AnyValue> for Native {
    fn from(v: AnyValue) -> Self {
        Native::Any(v)
    }
}

impl<T: Into<Native>> From<Vec<T>> for Native {
    fn from(items: Vec<T>) -> Self {
        Native::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Native>> From<Option<T>> for Native {
    fn from(v: Option<T>) -> Self {
        v.map_or(Native::Unit, Into::into)
    }
}

impl<K: Into<String>, V: Into<Native>> FromIterator<(K, V)> for Native {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Native::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
