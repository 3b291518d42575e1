// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde_json::Value;

/// Fills missing or `null` entries of `option` from `defaults`, recursively.
///
/// Only objects are merged key by key. A user-supplied array or scalar is kept
/// as-is even when the default is an object or an array of a different length.
///
/// ```rust
/// use canopy_model::merge_defaults;
/// use serde_json::json;
///
/// let mut option = json!({ "lineStyle": { "width": 3 }, "symbol": null });
/// merge_defaults(&mut option, &json!({
///     "symbol": "emptyCircle",
///     "lineStyle": { "width": 1.5, "color": "#ccc" },
/// }));
///
/// assert_eq!(option, json!({
///     "symbol": "emptyCircle",
///     "lineStyle": { "width": 3, "color": "#ccc" },
/// }));
/// ```
pub fn merge_defaults(option: &mut Value, defaults: &Value) {
    if option.is_null() {
        *option = defaults.clone();
        return;
    }
    let (Value::Object(option), Value::Object(defaults)) = (option, defaults) else {
        return;
    };
    for (key, default) in defaults {
        let slot = option.entry(key.clone()).or_insert(Value::Null);
        merge_defaults(slot, default);
    }
}
