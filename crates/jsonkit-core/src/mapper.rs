//! The model mapper: converting between [`Value`] trees and field-bearing
//! structs.
//!
//! Decoding is two passes. First every registered field's subtree is run
//! through that field type's [`Transformable`] impl and written back into a
//! copy of the document, which turns string-encoded numbers, float-valued enum
//! raws and the like into the shapes serde expects. Then the rewritten
//! document is rendered to text and decoded with the model's own
//! `Deserialize` impl.
//!
//! A model registers its fields with [`impl_model!`](crate::impl_model):
//!
//! ```
//! use jsonkit_core::{impl_model, Model, Value};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize, PartialEq)]
//! #[serde(default)]
//! struct Student {
//!     name: String,
//!     age: i32,
//! }
//!
//! impl_model!(Student { name, age });
//!
//! let tom = Student::from_text(r#"{"name":"Tom","age":"22"}"#);
//! assert_eq!(tom, Student { name: "Tom".into(), age: 22 });
//! ```

use crate::any::AnyValue;
use crate::de;
use crate::error::Result;
use crate::native::{Native, NativeMap};
use crate::transform::Transformable;
use crate::value::Value;
use serde::de::DeserializeOwned;

/// Object-safe view of a field's [`Transformable`] impl.
pub trait FieldTransform {
    /// Transform `value` as this field's type and render the result back.
    fn rewrite(&self, value: &Value) -> Option<Value>;

    fn null_on_failure(&self) -> bool;

    fn omit_when_null(&self) -> bool;

    /// The field's current contents as a value.
    fn field_value(&self) -> Value;
}

impl<T: Transformable> FieldTransform for T {
    fn rewrite(&self, value: &Value) -> Option<Value> {
        T::transform(value).map(|out| out.to_value())
    }

    fn null_on_failure(&self) -> bool {
        T::NULL_ON_FAILURE
    }

    fn omit_when_null(&self) -> bool {
        T::OMIT_WHEN_NULL
    }

    fn field_value(&self) -> Value {
        self.to_value()
    }
}

/// One registered field: its JSON key and a view of its contents.
pub struct Field<'a> {
    pub name: &'static str,
    pub value: &'a dyn FieldTransform,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, value: &'a dyn FieldTransform) -> Self {
        Self { name, value }
    }
}

/// A field-bearing type the mapper can build and render.
///
/// Implement it with [`impl_model!`](crate::impl_model). The listed keys must
/// agree with the names the `Deserialize` impl expects.
pub trait Model: Transformable + Default + DeserializeOwned {
    /// Registered fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Build from JSON text. Malformed text or a failed decode yields the
    /// default instance.
    fn from_text(text: &str) -> Self {
        match Value::parse(text).and_then(|value| value.to_model::<Self>()) {
            Ok(model) => model,
            Err(err) => {
                tracing::debug!(error = %err, "falling back to default model");
                Self::default()
            }
        }
    }

    /// Build from a native mapping. An empty mapping is the default instance
    /// without running the mapper.
    fn from_dictionary(map: &NativeMap) -> Self {
        if map.is_empty() {
            return Self::default();
        }
        Self::from_value(&Value::from(map.clone()))
    }

    fn from_value(value: &Value) -> Self {
        value.to_model().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "falling back to default model");
            Self::default()
        })
    }

    fn to_text(&self) -> String {
        self.to_value().to_text()
    }

    fn to_pretty_text(&self) -> String {
        self.to_value().to_pretty_text()
    }

    fn to_dictionary(&self) -> NativeMap {
        self.to_value().to_dictionary()
    }
}

impl Value {
    /// Decode a model, rewriting each registered field through its transform
    /// first.
    ///
    /// A `String` field whose subtree does not transform is blanked to `Null`
    /// rather than left in place. Other failed fields keep their raw subtree,
    /// and a missing key stays missing unless the transform produces a value
    /// from `Null`.
    pub fn to_model<T: Model>(&self) -> Result<T> {
        let template = T::default();
        let mut rewritten = self.clone();
        for field in template.fields() {
            let subtree = self.get(field.name);
            match field.value.rewrite(subtree) {
                Some(value) => {
                    tracing::trace!(field = field.name, value = %value.to_text(), "rewrote field");
                    rewritten.set(field.name, value);
                }
                None if field.value.null_on_failure() => {
                    tracing::trace!(field = field.name, "blanked field that does not transform");
                    rewritten.set(field.name, Value::Null);
                }
                None => {}
            }
        }
        de::from_str_with_path(&rewritten.to_text())
    }

    /// Decode a sequence of models.
    ///
    /// A `String` is parsed as JSON first; if it is not an array the result is
    /// empty. Each array element must decode, and the first failure aborts
    /// the whole call. Every other variant yields an empty sequence.
    pub fn to_models<T: Model>(&self) -> Result<Vec<T>> {
        match self {
            Value::String(text) => match AnyValue::from_text(text)? {
                array @ AnyValue::Array(_) => Value::from(array).to_models(),
                _ => Ok(Vec::new()),
            },
            Value::Array(items) => items.iter().map(Value::to_model::<T>).collect(),
            _ => Ok(Vec::new()),
        }
    }
}

/// Render a model as an `Object` of its registered fields. An empty `Option`
/// is left out so a later decode sees it as absent; any other field keeps its
/// key, `Null` included.
pub fn model_to_value<T: Model>(model: &T) -> Value {
    Value::Object(
        model
            .fields()
            .into_iter()
            .filter_map(|field| {
                let value = field.value.field_value();
                if value.is_null() && field.value.omit_when_null() {
                    return None;
                }
                Some((field.name.to_string(), value))
            })
            .collect(),
    )
}

/// Nested-model transform: build the model from the value's dictionary
/// projection. Non-objects project to an empty mapping, hence the default.
pub fn model_from_dictionary_value<T: Model>(value: &Value) -> T {
    T::from_dictionary(&value.to_dictionary())
}

pub fn models_from_text<T: Model>(text: &str) -> Vec<T> {
    models_from_value(&Value::String(text.to_string()))
}

pub fn models_from_natives<T: Model>(items: &[Native]) -> Vec<T> {
    models_from_value(&Value::from(Native::Array(items.to_vec())))
}

/// Fail-soft [`Value::to_models`]: any error yields an empty sequence.
pub fn models_from_value<T: Model>(value: &Value) -> Vec<T> {
    value.to_models().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "discarding model sequence");
        Vec::new()
    })
}

pub fn models_to_value<T: Model>(models: &[T]) -> Value {
    Value::Array(models.iter().map(Transformable::to_value).collect())
}

pub fn models_to_text<T: Model>(models: &[T]) -> String {
    models_to_value(models).to_text()
}

/// Register a struct's fields with the mapper.
///
/// Lists fields in declaration order, optionally renaming the JSON key with
/// `field => "key"`. Every listed field's type must be
/// [`Transformable`](crate::Transformable); unlisted fields are left to serde.
/// Also makes the model itself transformable (so it can nest inside other
/// models) and gives it a pretty-printing `Display`.
///
/// ```
/// use jsonkit_core::{impl_model, Model};
/// use serde::Deserialize;
///
/// #[derive(Debug, Default, Deserialize)]
/// #[serde(default)]
/// struct Course {
///     #[serde(rename = "courseName")]
///     name: String,
///     credits: f64,
/// }
///
/// impl_model!(Course { name => "courseName", credits });
///
/// let c = Course::from_text(r#"{"courseName":"Math","credits":"2.5"}"#);
/// assert_eq!(c.credits, 2.5);
/// assert_eq!(c.to_text(), r#"{"courseName":"Math","credits":2.5}"#);
/// ```
#[macro_export]
macro_rules! impl_model {
    ($model:ty { $($field:ident $(=> $key:literal)?),* $(,)? }) => {
        impl $crate::Model for $model {
            fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
                ::std::vec![
                    $($crate::Field::new($crate::__field_key!($field $(=> $key)?), &self.$field),)*
                ]
            }
        }

        impl $crate::Transformable for $model {
            fn transform(value: &$crate::Value) -> ::core::option::Option<Self> {
                ::core::option::Option::Some($crate::mapper::model_from_dictionary_value(value))
            }

            fn to_value(&self) -> $crate::Value {
                $crate::mapper::model_to_value(self)
            }
        }

        impl ::core::fmt::Display for $model {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::Model::to_pretty_text(self))
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __field_key {
    ($field:ident) => {
        ::core::stringify!($field)
    };
    ($field:ident => $key:literal) => {
        $key
    };
}
