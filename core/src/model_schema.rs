//! Views over the parsed `DataModelSchema` document.
//!
//! The schema carries `model.tables`, each with a `measures` list and a
//! `columns` list; calculated columns are the subset flagged
//! `"type": "calculated"`. Iteration follows document order throughout.

use serde_json::Value;

use crate::json_access::{array_at, parse_json_text, str_at};

#[derive(Debug, Clone)]
pub struct ModelDocument {
    root: Value,
}

impl ModelDocument {
    pub fn parse(text: &str) -> Result<ModelDocument, serde_json::Error> {
        Ok(ModelDocument {
            root: parse_json_text(text)?,
        })
    }

    pub fn from_value(root: Value) -> ModelDocument {
        ModelDocument { root }
    }

    pub fn tables(&self) -> impl Iterator<Item = ModelTable<'_>> {
        array_at(&self.root, &["model", "tables"])
            .iter()
            .map(ModelTable::new)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ModelTable<'a> {
    node: &'a Value,
}

impl<'a> ModelTable<'a> {
    fn new(node: &'a Value) -> ModelTable<'a> {
        ModelTable { node }
    }

    pub fn name(&self) -> &'a str {
        str_at(self.node, &["name"])
    }

    /// Measures with both a name and an expression present.
    pub fn measures(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        array_at(self.node, &["measures"])
            .iter()
            .filter_map(named_expression)
    }

    /// Columns flagged `"type": "calculated"` with a name and expression.
    pub fn calculated_columns(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        array_at(self.node, &["columns"])
            .iter()
            .filter(|c| str_at(c, &["type"]) == "calculated")
            .filter_map(named_expression)
    }
}

fn named_expression(v: &Value) -> Option<(&str, &str)> {
    let name = str_at(v, &["name"]);
    let expression = str_at(v, &["expression"]);
    if name.is_empty() || expression.is_empty() {
        return None;
    }
    Some((name, expression))
}
