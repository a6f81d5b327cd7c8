//! Enums backed by a raw value (`male = 1`, `"draft"`, ...).
//!
//! Decoding goes through the raw type's own transform first, so a `1.0` in
//! the document still selects the case whose raw value is `1`.
//!
//! ```
//! use jsonkit_core::{raw_value_enum, Transformable, Value};
//!
//! raw_value_enum! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub enum Sex: i64 {
//!         Male = 1,
//!         Female = 0,
//!     }
//! }
//!
//! assert_eq!(Sex::transform(&Value::from(1.0_f64)), Some(Sex::Male));
//! assert_eq!(Sex::default(), Sex::Male);
//! ```

use crate::transform::Transformable;
use crate::value::Value;

pub trait RawValueEnum: Sized {
    type Raw: Transformable + PartialEq;

    /// The case whose raw value equals `raw`.
    fn from_raw(raw: &Self::Raw) -> Option<Self>;

    fn raw_value(&self) -> Self::Raw;
}

/// Transform the raw value, then pick the matching case.
pub fn enum_transform<E: RawValueEnum>(value: &Value) -> Option<E> {
    let raw = E::Raw::transform(value)?;
    E::from_raw(&raw)
}

pub fn enum_to_value<E: RawValueEnum>(case: &E) -> Value {
    case.raw_value().to_value()
}

/// Converts a literal written in [`raw_value_enum!`] into the raw type, so
/// string cases can be written as `"draft"` for a `String` raw.
pub trait RawLiteral<R> {
    fn into_raw(self) -> R;
}

impl<T> RawLiteral<T> for T {
    fn into_raw(self) -> T {
        self
    }
}

impl RawLiteral<String> for &str {
    fn into_raw(self) -> String {
        self.to_string()
    }
}

/// Declare an enum whose cases map to raw values of one transformable type.
///
/// The first case is the default. Serde impls go through the raw value, and
/// the enum becomes [`Transformable`].
#[macro_export]
macro_rules! raw_value_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $first:ident = $first_raw:expr
            $(, $variant:ident = $variant_raw:expr)* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $first,
            $($variant,)*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl $crate::RawValueEnum for $name {
            type Raw = $raw;

            fn from_raw(raw: &$raw) -> ::core::option::Option<Self> {
                [$name::$first $(, $name::$variant)*]
                    .into_iter()
                    .find(|case| $crate::RawValueEnum::raw_value(case) == *raw)
            }

            fn raw_value(&self) -> $raw {
                match self {
                    $name::$first => $crate::enums::RawLiteral::<$raw>::into_raw($first_raw),
                    $($name::$variant => $crate::enums::RawLiteral::<$raw>::into_raw($variant_raw),)*
                }
            }
        }

        impl $crate::Transformable for $name {
            fn transform(value: &$crate::Value) -> ::core::option::Option<Self> {
                $crate::enums::enum_transform(value)
            }

            fn to_value(&self) -> $crate::Value {
                $crate::enums::enum_to_value(self)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &$crate::RawValueEnum::raw_value(self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <$raw as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::RawValueEnum>::from_raw(&raw).ok_or_else(|| {
                    <D::Error as $crate::__private::serde::de::Error>::custom(::std::format!(
                        "no {} case has raw value {:?}",
                        ::core::stringify!($name),
                        raw
                    ))
                })
            }
        }
    };
}
