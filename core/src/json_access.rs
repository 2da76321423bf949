//! Get-or-default traversal over loosely-typed JSON trees.
//!
//! Both report payloads are deeply nested and only duck-typed. Field access
//! goes through these explicit accessors so the default for each absent field
//! (empty string vs. empty list vs. `None`) is a visible decision at the call
//! site rather than an optional-chaining accident.

use serde_json::Value;

static EMPTY_ARRAY: &[Value] = &[];

/// Walks `path` through nested objects, `None` if any hop is absent or not an
/// object.
pub fn value_at<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = root;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

/// String at `path`, defaulting to `""` when absent or not a string.
pub fn str_at<'a>(root: &'a Value, path: &[&str]) -> &'a str {
    value_at(root, path).and_then(Value::as_str).unwrap_or("")
}

/// Array at `path`, defaulting to an empty slice when absent or not an array.
pub fn array_at<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    value_at(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(EMPTY_ARRAY)
}

pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix('\u{FEFF}').unwrap_or(s)
}

pub fn parse_json_text(text: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_bom(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn value_at_walks_nested_objects() {
        let v = json!({"a": {"b": {"c": 7}}});
        assert_eq!(value_at(&v, &["a", "b", "c"]), Some(&json!(7)));
        assert_eq!(value_at(&v, &["a", "x"]), None);
        assert_eq!(value_at(&v, &[]), Some(&v));
    }

    #[test]
    fn str_at_defaults_to_empty() {
        let v = json!({"name": "Sales", "count": 3});
        assert_eq!(str_at(&v, &["name"]), "Sales");
        assert_eq!(str_at(&v, &["missing"]), "");
        assert_eq!(str_at(&v, &["count"]), "");
    }

    #[test]
    fn array_at_defaults_to_empty() {
        let v = json!({"items": [1, 2], "name": "x"});
        assert_eq!(array_at(&v, &["items"]).len(), 2);
        assert!(array_at(&v, &["missing"]).is_empty());
        assert!(array_at(&v, &["name"]).is_empty());
    }

    #[test]
    fn parse_strips_bom() {
        let text = "\u{FEFF}{\"a\": 1}";
        let v = parse_json_text(text).expect("parse with BOM");
        assert_eq!(v, json!({"a": 1}));
    }
}
