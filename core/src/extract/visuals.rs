//! Visual extraction: one record per visual, in page then visual order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::json_access::{str_at, value_at};
use crate::layout::{LayoutDocument, select_items, visual_type};

#[derive(Debug, Clone, Serialize)]
pub struct VisualInfo {
    /// Display name of the page the visual sits on.
    pub page: String,
    /// Visual type string, `""` when absent.
    pub visual_type: String,
    /// Select-item `Name` → `Property`, both empty-string defaulted.
    pub fields: IndexMap<String, String>,
    /// `config.singleVisual.objects.dataColors`, passed through verbatim.
    pub colors: Value,
    /// `config.background.color`, `""` when absent.
    pub background_color: String,
}

/// Builds one [`VisualInfo`] per visual, in document order.
///
/// The renderer groups consecutive records under a page heading on page-name
/// change, so two sections sharing a display name render as one contiguous
/// block; the order here must stay exactly as found.
pub fn visual_details(layout: &LayoutDocument) -> Vec<VisualInfo> {
    let mut visuals = Vec::new();

    for section in layout.sections() {
        let page = section.display_name();
        for visual in section.visuals() {
            let config = visual.config().unwrap_or(Value::Null);

            let mut fields = IndexMap::new();
            for item in select_items(&config) {
                fields.insert(
                    str_at(item, &["Name"]).to_string(),
                    str_at(item, &["Property"]).to_string(),
                );
            }

            let colors = value_at(&config, &["singleVisual", "objects", "dataColors"])
                .cloned()
                .unwrap_or_else(empty_object);

            visuals.push(VisualInfo {
                page: page.to_string(),
                visual_type: visual_type(&config).to_string(),
                fields,
                colors,
                background_color: str_at(&config, &["background", "color"]).to_string(),
            });
        }
    }

    visuals
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

pub(crate) fn colors_is_empty(colors: &Value) -> bool {
    match colors {
        Value::Object(map) => map.is_empty(),
        Value::Null => true,
        _ => false,
    }
}
