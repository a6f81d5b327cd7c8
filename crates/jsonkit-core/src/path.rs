//! Dot-separated path access over a [`Value`] tree.
//!
//! A path like `"students.0.name"` is split on dots. At an `Object` a segment
//! is a key; at an `Array` it must parse as an index. Reads are fail-soft and
//! produce `Null`; writes that cannot reach their slot are ignored, matching
//! the single-level subscript rules.

use crate::value::Value;

static NULL: Value = Value::Null;

/// A parsed dot path.
#[derive(Debug, Clone)]
struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// An empty string addresses the root.
    fn parse(path: &'a str) -> Self {
        if path.is_empty() {
            return Self { segments: Vec::new() };
        }
        Self {
            segments: path.split('.').collect(),
        }
    }
}

/// Step one level down. Out-of-range indices read as absent rather than panic.
fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(value: &'v mut Value, segment: &str) -> Option<&'v mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

/// Walk to the parent of the last segment. `None` when the path is empty or
/// an intermediate slot is missing.
fn parent_mut<'v, 'p>(root: &'v mut Value, path: &Path<'p>) -> Option<(&'v mut Value, &'p str)> {
    let (last, init) = path.segments.split_last()?;
    let mut current = root;
    for segment in init {
        current = child_mut(current, segment)?;
    }
    Some((current, *last))
}

impl Value {
    /// Read the subtree at `path`; `Null` when any step is missing.
    pub fn get_path(&self, path: &str) -> &Value {
        let path = Path::parse(path);
        let mut current = self;
        for segment in &path.segments {
            match child(current, segment) {
                Some(next) => current = next,
                None => return &NULL,
            }
        }
        current
    }

    /// Write `value` at `path`. The final object key is upserted; a final
    /// array index must already exist. An empty path replaces the root.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) {
        let parsed = Path::parse(path);
        if parsed.segments.is_empty() {
            *self = value.into();
            return;
        }
        let Some((parent, last)) = parent_mut(self, &parsed) else {
            tracing::trace!(path, "set_path: intermediate slot missing");
            return;
        };
        match parent {
            Value::Object(map) => {
                map.insert(last.to_string(), value.into());
            }
            Value::Array(items) => {
                if let Some(slot) = last.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                    *slot = value.into();
                }
            }
            _ => {}
        }
    }

    /// Remove the key or index at `path`. Missing slots are ignored.
    pub fn remove_path(&mut self, path: &str) {
        let parsed = Path::parse(path);
        let Some((parent, last)) = parent_mut(self, &parsed) else {
            return;
        };
        match parent {
            Value::Object(map) => {
                map.shift_remove(last);
            }
            Value::Array(items) => {
                if let Some(i) = last.parse::<usize>().ok().filter(|i| *i < items.len()) {
                    items.remove(i);
                }
            }
            _ => {}
        }
    }
}
