//! The transform capability and its built-in implementations.
//!
//! A type implements [`Transformable`] to say how it is built from a [`Value`]
//! and how it renders back into one. Resolution is static: scalars, strings,
//! containers and `Value`/`AnyValue` are covered here, models register through
//! [`impl_model!`](crate::impl_model), raw-value enums through
//! [`raw_value_enum!`](crate::raw_value_enum), and a type with no impl is
//! simply not transformable (the mapper leaves such fields alone).
//!
//! Decoding is lenient in the ways downstream models rely on: integers accept
//! base-10 strings, `Null` becomes the zero value for numbers and `false` for
//! bool, and containers drop elements that do not transform instead of
//! failing as a whole.

use crate::any::AnyValue;
use crate::number::Number;
use crate::value::{Map, Value};
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

pub trait Transformable: Sized {
    /// When decode fails, blank the mapped field with `Null` rather than
    /// leaving its raw subtree in place. Only `String` sets this.
    const NULL_ON_FAILURE: bool = false;

    /// A model field of this type is left out of its encoded object when it
    /// renders as `Null`. Only `Option` sets this.
    const OMIT_WHEN_NULL: bool = false;

    /// Build `Self` from a value; `None` when the value has no acceptable form.
    fn transform(value: &Value) -> Option<Self>;

    fn to_value(&self) -> Value;
}

macro_rules! integer_transform {
    ($($t:ty),*) => {
        $(
            impl Transformable for $t {
                fn transform(value: &Value) -> Option<Self> {
                    match value {
                        Value::String(s) => s.parse::<$t>().ok(),
                        Value::Number(n) => n.as_i64().and_then(|i| <$t>::try_from(i).ok()),
                        Value::Null => Some(0),
                        _ => None,
                    }
                }

                fn to_value(&self) -> Value {
                    match i64::try_from(*self) {
                        Ok(i) => Value::Number(Number::Int(i)),
                        Err(_) => Value::Number(Number::Double(*self as f64)),
                    }
                }
            }
        )*
    };
}

integer_transform!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Transformable for f64 {
    fn transform(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => Some(n.as_f64()),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null => Some(0.0),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(Number::Double(*self))
    }
}

impl Transformable for f32 {
    fn transform(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => Some(n.as_f64() as f32),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null => Some(0.0),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Number(Number::Float(*self))
    }
}

impl Transformable for bool {
    fn transform(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.parse().ok(),
            Value::Bool(b) => Some(*b),
            Value::Number(n) => Some(n.as_f64() > 0.0),
            Value::Null => Some(false),
            _ => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Transformable for String {
    const NULL_ON_FAILURE: bool = true;

    fn transform(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.string()),
            Value::Array(_) | Value::Object(_) => Some(value.to_text()),
            Value::Null => None,
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Transformable for Value {
    fn transform(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

/// Nested `Null`s become the box's null marker; a bare `Null` is absence.
impl Transformable for AnyValue {
    fn transform(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            other => Some(any_from_value(other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::from(self.clone())
    }
}

fn any_from_value(value: &Value) -> AnyValue {
    match value {
        Value::String(s) => AnyValue::String(s.clone()),
        Value::Number(n) => AnyValue::from(*n),
        Value::Object(map) => AnyValue::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), any_from_value(value)))
                .collect(),
        ),
        Value::Array(items) => AnyValue::Array(items.iter().map(any_from_value).collect()),
        Value::Bool(b) => AnyValue::Bool(*b),
        Value::Null => AnyValue::Null,
    }
}

/// `Some` only when the wrapped type accepts the value; otherwise absence,
/// which the mapper treats as "leave the field alone".
impl<T: Transformable> Transformable for Option<T> {
    const OMIT_WHEN_NULL: bool = true;

    fn transform(value: &Value) -> Option<Self> {
        T::transform(value).map(Some)
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Transformable> Transformable for Box<T> {
    const NULL_ON_FAILURE: bool = T::NULL_ON_FAILURE;
    const OMIT_WHEN_NULL: bool = T::OMIT_WHEN_NULL;

    fn transform(value: &Value) -> Option<Self> {
        T::transform(value).map(Box::new)
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Transform each element, dropping (and logging) the ones that do not fit.
fn transform_elements<T: Transformable, C: FromIterator<T>>(items: &[Value]) -> C {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let out = T::transform(item);
            if out.is_none() {
                tracing::debug!(
                    index,
                    element = %item.to_text(),
                    ty = std::any::type_name::<T>(),
                    "dropping array element that does not transform"
                );
            }
            out
        })
        .collect()
}

fn transform_entries<T: Transformable, C: FromIterator<(String, T)>>(map: &Map) -> C {
    map.iter()
        .filter_map(|(key, item)| {
            let out = T::transform(item);
            if out.is_none() {
                tracing::debug!(
                    key = key.as_str(),
                    element = %item.to_text(),
                    ty = std::any::type_name::<T>(),
                    "dropping object entry that does not transform"
                );
            }
            out.map(|value| (key.clone(), value))
        })
        .collect()
}

fn elements_value<'a, T: Transformable + 'a>(items: impl IntoIterator<Item = &'a T>) -> Value {
    Value::Array(items.into_iter().map(Transformable::to_value).collect())
}

fn entries_value<'a, T: Transformable + 'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a T)>,
) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.clone(), value.to_value()))
            .collect(),
    )
}

impl<T: Transformable> Transformable for Vec<T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_elements(value.as_array()?))
    }

    fn to_value(&self) -> Value {
        elements_value(self)
    }
}

impl<T: Transformable + Eq + Hash> Transformable for HashSet<T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_elements(value.as_array()?))
    }

    fn to_value(&self) -> Value {
        elements_value(self)
    }
}

impl<T: Transformable + Ord> Transformable for BTreeSet<T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_elements(value.as_array()?))
    }

    fn to_value(&self) -> Value {
        elements_value(self)
    }
}

impl<T: Transformable> Transformable for HashMap<String, T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_entries(value.as_object()?))
    }

    fn to_value(&self) -> Value {
        entries_value(self)
    }
}

impl<T: Transformable> Transformable for BTreeMap<String, T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_entries(value.as_object()?))
    }

    fn to_value(&self) -> Value {
        entries_value(self)
    }
}

impl<T: Transformable> Transformable for IndexMap<String, T> {
    fn transform(value: &Value) -> Option<Self> {
        Some(transform_entries(value.as_object()?))
    }

    fn to_value(&self) -> Value {
        entries_value(self)
    }
}
