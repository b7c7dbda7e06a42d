//! Shallow merge helpers for JSON mappings
//!
//! Both helpers treat an absent input mapping as an empty one.

use serde_json::{Map, Value};

/// Copy `base` and let `overrides` win on every shared key
#[must_use]
pub fn overlay<'a, I>(base: Option<&Map<String, Value>>, overrides: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut merged = base.cloned().unwrap_or_default();
    for (key, value) in overrides {
        merged.insert(key.to_string(), Value::String(value.to_string()));
    }
    merged
}

/// Add every key of `defaults` that `existing` lacks
///
/// Keys already in `existing` keep their value and position; new keys are
/// appended in the order `defaults` lists them. Returns the number of keys
/// added.
pub fn fill_missing(existing: &mut Map<String, Value>, defaults: Option<&Map<String, Value>>) -> usize {
    let Some(defaults) = defaults else {
        return 0;
    };
    let mut added = 0;
    for (key, value) in defaults {
        if !existing.contains_key(key) {
            existing.insert(key.clone(), value.clone());
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_overlay_overrides_win() {
        let base = map(json!({"a": "1", "b": "2"}));
        let merged = overlay(Some(&base), [("b", "stable"), ("c", "stable")]);
        assert_eq!(Value::Object(merged), json!({"a": "1", "b": "stable", "c": "stable"}));
    }

    #[test]
    fn test_overlay_absent_base() {
        let merged = overlay(None, [("c", "stable")]);
        assert_eq!(Value::Object(merged), json!({"c": "stable"}));
    }

    #[test]
    fn test_fill_missing_existing_wins() {
        let mut existing = map(json!({"start": "node app.js", "install-service": "custom"}));
        let defaults = map(json!({"install-service": "node install.js", "uninstall-service": "node uninstall.js"}));
        let added = fill_missing(&mut existing, Some(&defaults));
        assert_eq!(added, 1);
        assert_eq!(
            Value::Object(existing),
            json!({"start": "node app.js", "install-service": "custom", "uninstall-service": "node uninstall.js"})
        );
    }

    #[test]
    fn test_fill_missing_absent_defaults() {
        let mut existing = map(json!({"a": 1}));
        assert_eq!(fill_missing(&mut existing, None), 0);
        assert_eq!(Value::Object(existing), json!({"a": 1}));
    }

    #[test]
    fn test_fill_missing_keeps_key_order() {
        let mut existing = map(json!({"z": 1, "a": 2}));
        fill_missing(&mut existing, Some(&map(json!({"m": 3}))));
        let keys: Vec<_> = existing.keys().cloned().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
