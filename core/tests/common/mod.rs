use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds an in-memory zip archive from (entry name, text content) pairs.
pub fn build_archive(parts: &[(&str, &str)]) -> Cursor<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in parts {
        writer.start_file(*name, options).expect("start zip entry");
        writer.write_all(content.as_bytes()).expect("write zip entry");
    }
    let mut cursor = writer.finish().expect("finish zip");
    cursor.set_position(0);
    cursor
}

pub const SIMPLE_LAYOUT: &str = r##"{
    "filters": [{"table": "Report", "column": "Scope", "filterType": "Advanced", "values": []}],
    "sections": [{
        "displayName": "Overview",
        "filters": [{"table": "Date", "column": "Year", "filterType": "Basic", "values": [2023]}],
        "visualContainers": [{
            "config": {
                "singleVisual": {
                    "visualType": "barChart",
                    "title": "Sales by Region",
                    "prototypeQuery": {"Select": [
                        {"Table": "Sales", "Column": "Amount", "Name": "Sales.Amount", "Property": "Amount"}
                    ]},
                    "objects": {"dataColors": {"fill": "#118DFF"}}
                },
                "background": {"color": "#FFFFFF"}
            },
            "filters": [{"table": "Sales", "column": "Region", "filterType": "Categorical", "values": ["West"]}]
        }]
    }]
}"##;

pub const SIMPLE_MODEL: &str = r#"{
    "model": {
        "tables": [{
            "name": "Sales",
            "columns": [
                {"name": "Amount", "dataType": "decimal"},
                {"name": "Margin", "type": "calculated", "expression": "[Amount] - [Cost]"}
            ],
            "measures": [{"name": "Total", "expression": "SUM(Sales[Amount])"}]
        }]
    }
}"#;
