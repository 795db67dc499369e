//! Structural merge of a user-supplied JSON tree over defaults.

use serde_json::Value;

/// Merge `overlay` into `base`.
///
/// Objects merge key-wise and recursively. Every other value in `overlay`
/// (arrays, scalars, `null`) replaces the value in `base` wholesale.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Owned convenience over [`deep_merge`].
pub fn merged(mut base: Value, overlay: Value) -> Value {
    deep_merge(&mut base, overlay);
    base
}
