//! Views over the parsed `Report/Layout` document.
//!
//! The layout is a loosely-typed tree: `sections` (pages) hold
//! `visualContainers` (visuals), and filters hang off the document, each
//! section, and each visual. Real archives embed a visual's `config` (and
//! sometimes `filters`) as a JSON string rather than an object, so both
//! shapes are accepted here.

use serde_json::Value;

use crate::json_access::{array_at, parse_json_text, str_at};

#[derive(Debug, Clone)]
pub struct LayoutDocument {
    root: Value,
}

impl LayoutDocument {
    pub fn parse(text: &str) -> Result<LayoutDocument, serde_json::Error> {
        Ok(LayoutDocument {
            root: parse_json_text(text)?,
        })
    }

    pub fn from_value(root: Value) -> LayoutDocument {
        LayoutDocument { root }
    }

    /// The document's own (report-level) filter list, entries as found.
    pub fn report_filters(&self) -> Vec<Value> {
        field_as_list(&self.root, "filters")
    }

    pub fn sections(&self) -> impl Iterator<Item = Section<'_>> {
        array_at(&self.root, &["sections"]).iter().map(Section::new)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    node: &'a Value,
}

impl<'a> Section<'a> {
    fn new(node: &'a Value) -> Section<'a> {
        Section { node }
    }

    pub fn display_name(&self) -> &'a str {
        str_at(self.node, &["displayName"])
    }

    pub fn visuals(&self) -> impl Iterator<Item = Visual<'a>> {
        array_at(self.node, &["visualContainers"])
            .iter()
            .map(Visual::new)
    }

    pub fn filters(&self) -> Vec<Value> {
        field_as_list(self.node, "filters")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Visual<'a> {
    node: &'a Value,
}

impl<'a> Visual<'a> {
    fn new(node: &'a Value) -> Visual<'a> {
        Visual { node }
    }

    /// The visual's `config`, parsed from an embedded string when necessary.
    pub fn config(&self) -> Option<Value> {
        object_or_embedded(self.node.get("config")?)
    }

    pub fn filters(&self) -> Vec<Value> {
        field_as_list(self.node, "filters")
    }
}

/// `config.singleVisual.prototypeQuery.Select` list.
pub fn select_items(config: &Value) -> &[Value] {
    array_at(config, &["singleVisual", "prototypeQuery", "Select"])
}

/// Visual type string, `""` when absent.
pub fn visual_type(config: &Value) -> &str {
    str_at(config, &["singleVisual", "visualType"])
}

/// Visual title, `None` when absent or empty.
pub fn visual_title(config: &Value) -> Option<&str> {
    let title = str_at(config, &["singleVisual", "title"]);
    if title.is_empty() { None } else { Some(title) }
}

fn object_or_embedded(v: &Value) -> Option<Value> {
    match v {
        Value::Object(_) => Some(v.clone()),
        Value::String(s) => parse_json_text(s).ok(),
        _ => None,
    }
}

fn field_as_list(node: &Value, key: &str) -> Vec<Value> {
    match node.get(key) {
        Some(Value::Array(items)) => items.clone(),
        Some(Value::String(s)) => match parse_json_text(s) {
            Ok(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}
