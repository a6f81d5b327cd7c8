//! # jsonkit-core
//!
//! A JSON value algebra with a lenient model mapper on top.
//!
//! [`Value`] is a tagged tree (string, number, object, array, bool, null) with
//! fail-soft subscripting and mutation. [`Transformable`] says how a Rust type
//! is built from a `Value`, and the model mapper uses those impls to absorb
//! loose input (string-encoded numbers, float-valued enum raws, missing keys)
//! before handing the document to serde.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonkit_core::{impl_model, raw_value_enum, Model, Value};
//! use serde::Deserialize;
//!
//! raw_value_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Sex: i64 {
//!         Male = 1,
//!         Female = 0,
//!     }
//! }
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct Student {
//!     name: String,
//!     age: i32,
//!     sex: Sex,
//! }
//!
//! impl_model!(Student { name, age, sex });
//!
//! let student = Student::from_text(r#"{"name":"Lily","age":"20","sex":0.0}"#);
//! assert_eq!(student.age, 20);
//! assert_eq!(student.sex, Sex::Female);
//!
//! let mut doc = Value::from_text(r#"{"a":{"b":[1,2]}}"#);
//! doc.set_path("a.b.1", 5);
//! assert_eq!(doc.to_text(), r#"{"a":{"b":[1,5]}}"#);
//! ```
//!
//! ## Null handling
//!
//! The `Value` layer renders `Null` as the string `"null"` and reads the string
//! `"null"` back as `Null`. [`AnyValue`] does not: it follows standard JSON
//! null semantics and is the type to reach for when a payload has to survive a
//! round trip untouched.
//!
//! ## Modules
//!
//! - [`value`]: the `Value` tree, subscripting, mutation, canonical text
//! - [`number`]: the int/float/double number payload
//! - [`native`]: host-side dynamic values (`to_native`, `to_dictionary`)
//! - [`transform`]: the [`Transformable`] capability and built-in impls
//! - [`enums`]: raw-value-backed enums
//! - [`mapper`]: the model mapper and [`Model`] constructors
//! - [`any`]: the boxed [`AnyValue`] codec
//! - [`de`]: path-aware serde helpers behind the strict entry points
//! - [`error`]: errors for the strict entry points

pub mod any;
mod codec;
pub mod de;
pub mod enums;
pub mod error;
pub mod mapper;
pub mod native;
pub mod number;
mod path;
pub mod transform;
pub mod value;

pub use any::AnyValue;
pub use enums::RawValueEnum;
pub use error::{JsonError, Result};
pub use mapper::{
    models_from_natives, models_from_text, models_from_value, models_to_text, models_to_value,
    Field, FieldTransform, Model,
};
pub use native::{Native, NativeMap};
pub use number::Number;
pub use transform::Transformable;
pub use value::{array_text, object_text, Map, Value};

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
