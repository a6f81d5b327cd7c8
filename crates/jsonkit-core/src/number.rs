//! The numeric leaf of the value algebra.

use crate::native::Native;
use std::fmt;

/// A JSON number held in one of three representations.
///
/// Equality widens both sides to `f64`, so `Int(1)`, `Float(1.0)` and
/// `Double(1.0)` all compare equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f32),
    Double(f64),
}

impl Number {
    /// The underlying scalar as a host value.
    pub fn value(&self) -> Native {
        match *self {
            Number::Int(i) => Native::Int(i),
            Number::Float(f) => Native::Float(f),
            Number::Double(d) => Native::Double(d),
        }
    }

    /// Canonical rendering: integers without a decimal point, floats in their
    /// shortest round-trippable form (`28.0`, `0.1`, `1e20`).
    pub fn string(&self) -> String {
        match *self {
            Number::Int(i) => i.to_string(),
            Number::Float(f) => format!("{f:?}"),
            Number::Double(d) => format!("{d:?}"),
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f64::from(f),
            Number::Double(d) => d,
        }
    }

    /// The value as an `i64` when it is integral and in range.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::Float(f) => integral_f64(f64::from(f)),
            Number::Double(d) => integral_f64(d),
        }
    }

    /// Classify a parsed `f64`: integral values become `Int`, values an `f32`
    /// holds exactly become `Float`, everything else stays `Double`.
    ///
    /// A `Float` whose shortest text is not exact in `f32` (such as `0.1`)
    /// therefore reads back as the `Double` that text denotes.
    pub(crate) fn from_parsed_f64(d: f64) -> Number {
        if let Some(i) = integral_f64(d) {
            return Number::Int(i);
        }
        let narrowed = d as f32;
        if narrowed.is_finite() && f64::from(narrowed) == d {
            Number::Float(narrowed)
        } else {
            Number::Double(d)
        }
    }
}

pub(crate) fn integral_f64(d: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if d.is_finite() && d.fract() == 0.0 && d >= i64::MIN as f64 && d < i64::MAX as f64 {
        Some(d as i64)
    } else {
        None
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.as_f64() == other.as_f64()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string())
    }
}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<f32> for Number {
    fn from(f: f32) -> Self {
        Number::Float(f)
    }
}

impl From<f64> for Number {
    fn from(d: f64) -> Self {
        Number::Double(d)
    }
}
