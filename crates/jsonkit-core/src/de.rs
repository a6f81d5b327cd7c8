//! Path-aware structured decoding and encoding.
//!
//! Every strict entry point funnels through here so errors carry the JSON
//! path (`students[2].age`) where the mismatch was detected.

use crate::error::{JsonError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deserialize `T` from JSON text, attaching the failing path to errors.
///
/// Nesting depth is unbounded; only the thread's stack limits how deep a
/// document may go.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(src);
    de.disable_recursion_limit();
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(JsonError::decode)?;
    de.end()?;
    Ok(value)
}

/// Serialize `value` to compact JSON text, attaching the failing path to errors.
pub fn to_string_with_path<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = Vec::new();
    let mut ser = serde_json::Serializer::new(&mut out);
    serde_path_to_error::serialize(value, &mut ser).map_err(JsonError::encode)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&out).into_owned())
}
