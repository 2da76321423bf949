//! Filter extraction at report, page, and visual granularity.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::json_access::str_at;
use crate::layout::{LayoutDocument, visual_title};

/// Placeholder title for visuals that carry filters but no title.
pub const UNNAMED_VISUAL: &str = "Unnamed Visual";

#[derive(Debug, Clone, Serialize)]
pub struct FilterEntry {
    pub table: String,
    pub column: String,
    #[serde(rename = "filterType")]
    pub filter_type: String,
    /// Passed through in whatever shape the source holds (scalar, list, or
    /// nested object).
    pub values: Value,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterSet {
    pub report: Vec<FilterEntry>,
    /// Page display name → filters. Later pages with the same name overwrite
    /// earlier entries.
    pub pages: IndexMap<String, Vec<FilterEntry>>,
    /// Page display name → visual title → filters; same-page/same-title
    /// collisions overwrite.
    pub visuals: IndexMap<String, IndexMap<String, Vec<FilterEntry>>>,
}

/// Normalizes a raw filter list: string fields default to `""`, `values` to
/// an empty list. No deduplication, no coercion of `values`.
pub fn normalize_filters(raw: &[Value]) -> Vec<FilterEntry> {
    raw.iter()
        .map(|f| FilterEntry {
            table: str_at(f, &["table"]).to_string(),
            column: str_at(f, &["column"]).to_string(),
            filter_type: str_at(f, &["filterType"]).to_string(),
            values: f.get("values").cloned().unwrap_or(Value::Array(Vec::new())),
        })
        .collect()
}

/// Walks report, page, and visual filters through the one shared
/// normalization routine.
pub fn filter_set(layout: &LayoutDocument) -> FilterSet {
    let mut set = FilterSet {
        report: normalize_filters(&layout.report_filters()),
        ..FilterSet::default()
    };

    for section in layout.sections() {
        let page = section.display_name().to_string();
        set.pages
            .insert(page.clone(), normalize_filters(&section.filters()));

        let mut per_visual: IndexMap<String, Vec<FilterEntry>> = IndexMap::new();
        for visual in section.visuals() {
            let title = visual
                .config()
                .as_ref()
                .and_then(visual_title)
                .unwrap_or(UNNAMED_VISUAL)
                .to_string();
            per_visual.insert(title, normalize_filters(&visual.filters()));
        }
        set.visuals.insert(page, per_visual);
    }

    set
}
