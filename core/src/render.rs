//! Markdown rendering of the four extraction results.
//!
//! Pure string assembly: nothing here re-derives or validates what the
//! extraction passes produced. Section order and headings are fixed.

use serde_json::Value;

use crate::extract::{FilterEntry, colors_is_empty};
use crate::package::Documentation;

pub fn render_markdown(doc: &Documentation) -> String {
    let mut out = String::new();
    out.push_str("# Report Documentation\n");

    render_tables(&mut out, doc);
    render_calculations(&mut out, doc);
    render_visuals(&mut out, doc);
    render_filters(&mut out, doc);

    out
}

fn render_tables(out: &mut String, doc: &Documentation) {
    out.push_str("\n## 1. Tables and Fields\n");

    for (table, summary) in &doc.tables {
        out.push_str(&format!("\n### {}\n", table));
        out.push_str("\n**Columns:**\n");
        for column in &summary.columns {
            out.push_str(&format!("- {}\n", column));
        }
        out.push_str("\n**Measures:**\n");
        for measure in &summary.measures {
            out.push_str(&format!("- {}\n", measure));
        }
    }
}

fn render_calculations(out: &mut String, doc: &Documentation) {
    out.push_str("\n## 2. DAX Calculations\n");

    for (table, calcs) in &doc.calculations {
        out.push_str(&format!("\n### {}\n", table));
        for (name, expression) in &calcs.measures {
            out.push_str(&format!("\n**Measure: {}**\n", name));
            out.push_str(&format!("```dax\n{}\n```\n", expression));
        }
        for (name, expression) in &calcs.calculated_columns {
            out.push_str(&format!("\n**Calculated Column: {}**\n", name));
            out.push_str(&format!("```dax\n{}\n```\n", expression));
        }
    }
}

fn render_visuals(out: &mut String, doc: &Documentation) {
    out.push_str("\n## 3. Pages and Visual Details\n");

    // Heading on page-name change only: sections sharing a display name
    // render as one contiguous block.
    let mut current_page: Option<&str> = None;
    for visual in &doc.visuals {
        if current_page != Some(visual.page.as_str()) {
            out.push_str(&format!("\n### Page: {}\n", visual.page));
            current_page = Some(visual.page.as_str());
        }

        let type_label = if visual.visual_type.is_empty() {
            "(unknown)"
        } else {
            visual.visual_type.as_str()
        };
        out.push_str(&format!("\n**Visual: {}**\n", type_label));

        if !visual.fields.is_empty() {
            out.push_str("- Fields:\n");
            for (name, property) in &visual.fields {
                out.push_str(&format!("  - {}: {}\n", name, property));
            }
        }
        if !colors_is_empty(&visual.colors) {
            out.push_str(&format!("- Data Colors: {}\n", compact_json(&visual.colors)));
        }
        if !visual.background_color.is_empty() {
            out.push_str(&format!("- Background Color: {}\n", visual.background_color));
        }
    }
}

fn render_filters(out: &mut String, doc: &Documentation) {
    out.push_str("\n## 4. Filters\n");
    let filters = &doc.filters;

    if !filters.report.is_empty() {
        out.push_str("\n### Report Level Filters\n");
        for entry in &filters.report {
            render_filter_line(out, entry);
        }
    }

    if filters.pages.values().any(|list| !list.is_empty()) {
        out.push_str("\n### Page Level Filters\n");
        for (page, entries) in &filters.pages {
            if entries.is_empty() {
                continue;
            }
            out.push_str(&format!("\n**{}**\n", page));
            for entry in entries {
                render_filter_line(out, entry);
            }
        }
    }

    let any_visual_filters = filters
        .visuals
        .values()
        .flat_map(|per_visual| per_visual.values())
        .any(|list| !list.is_empty());
    if any_visual_filters {
        out.push_str("\n### Visual Level Filters\n");
        for (page, per_visual) in &filters.visuals {
            if per_visual.values().all(|list| list.is_empty()) {
                continue;
            }
            for (title, entries) in per_visual {
                if entries.is_empty() {
                    continue;
                }
                out.push_str(&format!("\n**{} / {}**\n", page, title));
                for entry in entries {
                    render_filter_line(out, entry);
                }
            }
        }
    }
}

fn render_filter_line(out: &mut String, entry: &FilterEntry) {
    out.push_str(&format!(
        "- {}.{}: {}\n",
        entry.table,
        entry.column,
        compact_json(&entry.values)
    ));
}

fn compact_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
