//! Table/field extraction: table → column associations used by visuals.

use indexmap::IndexMap;
use serde::Serialize;

use crate::json_access::str_at;
use crate::layout::{LayoutDocument, select_items};

#[derive(Debug, Clone, Default, Serialize)]
pub struct TableSummary {
    /// Column names in select order; duplicates are kept (the same column is
    /// routinely selected by several visuals).
    pub columns: Vec<String>,
    /// Never populated; carried so the rendered summary keeps its measures
    /// block.
    pub measures: Vec<String>,
}

/// Collects the `Table`/`Column` pairs of every select item of every visual.
///
/// First occurrence of a table name creates its entry; select items with an
/// empty table name are skipped.
pub fn table_summaries(layout: &LayoutDocument) -> IndexMap<String, TableSummary> {
    let mut summaries: IndexMap<String, TableSummary> = IndexMap::new();

    for section in layout.sections() {
        for visual in section.visuals() {
            let Some(config) = visual.config() else {
                continue;
            };
            for item in select_items(&config) {
                let table = str_at(item, &["Table"]);
                if table.is_empty() {
                    continue;
                }
                let entry = summaries.entry(table.to_string()).or_default();
                let column = str_at(item, &["Column"]);
                if !column.is_empty() {
                    entry.columns.push(column.to_string());
                }
            }
        }
    }

    summaries
}
