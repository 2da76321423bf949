use std::io::Write;
use std::path::Path;
use std::process::Command;

fn pbidoc_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pbidoc"))
}

fn write_fixture_archive(path: &Path, parts: &[(&str, &str)]) {
    let file = std::fs::File::create(path).expect("create fixture file");
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, content) in parts {
        writer.start_file(*name, options).expect("start zip entry");
        writer.write_all(content.as_bytes()).expect("write zip entry");
    }
    writer.finish().expect("finish zip");
}

const LAYOUT: &str = r#"{
    "sections": [{
        "displayName": "Overview",
        "filters": [{"table": "Date", "column": "Year", "filterType": "Basic", "values": [2023]}],
        "visualContainers": [{
            "config": {"singleVisual": {
                "visualType": "barChart",
                "prototypeQuery": {"Select": [{"Table": "Sales", "Column": "Amount"}]}
            }}
        }]
    }]
}"#;

const MODEL: &str = r#"{
    "model": {"tables": [{
        "name": "Sales",
        "measures": [{"name": "Total", "expression": "SUM(Sales[Amount])"}]
    }]}
}"#;

#[test]
fn generate_writes_markdown_with_four_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("report.pbix");
    write_fixture_archive(
        &archive,
        &[("Report/Layout", LAYOUT), ("DataModelSchema", MODEL)],
    );

    let output = pbidoc_cmd()
        .args(["generate", archive.to_str().unwrap()])
        .output()
        .expect("failed to run pbidoc");
    assert!(
        output.status.success(),
        "generate should exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let doc_path = dir.path().join("report.md");
    let doc = std::fs::read_to_string(&doc_path).expect("read generated file");
    assert!(doc.contains("## 1. Tables and Fields"));
    assert!(doc.contains("## 2. DAX Calculations"));
    assert!(doc.contains("## 3. Pages and Visual Details"));
    assert!(doc.contains("## 4. Filters"));
    assert!(doc.contains("- Date.Year: [2023]"));
}

#[test]
fn generate_overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("report.pbix");
    write_fixture_archive(&archive, &[("Report/Layout", LAYOUT)]);

    let out = dir.path().join("doc.md");
    std::fs::write(&out, "stale content").expect("seed output file");

    let status = pbidoc_cmd()
        .args([
            "generate",
            archive.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .status()
        .expect("failed to run pbidoc");
    assert!(status.success());

    let doc = std::fs::read_to_string(&out).expect("read output");
    assert!(!doc.contains("stale content"));
    assert!(doc.starts_with("# Report Documentation"));
}

#[test]
fn generate_json_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("report.pbix");
    write_fixture_archive(&archive, &[("DataModelSchema", MODEL)]);

    let status = pbidoc_cmd()
        .args(["generate", archive.to_str().unwrap(), "--format", "json"])
        .status()
        .expect("failed to run pbidoc");
    assert!(status.success());

    let json: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("report.json")).expect("read json"),
    )
    .expect("valid json output");
    assert_eq!(
        json["calculations"]["Sales"]["measures"]["Total"],
        "SUM(Sales[Amount])"
    );
}

#[test]
fn empty_archive_still_generates() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("empty.pbix");
    write_fixture_archive(&archive, &[]);

    let status = pbidoc_cmd()
        .args(["generate", archive.to_str().unwrap()])
        .status()
        .expect("failed to run pbidoc");
    assert!(status.success());

    let doc = std::fs::read_to_string(dir.path().join("empty.md")).expect("read output");
    assert_eq!(doc.matches("\n## ").count(), 4);
}

#[test]
fn missing_archive_exits_nonzero() {
    let output = pbidoc_cmd()
        .args(["generate", "/nonexistent/report.pbix"])
        .output()
        .expect("failed to run pbidoc");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open"));
}

#[test]
fn info_lists_entries_and_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let archive = dir.path().join("report.pbix");
    write_fixture_archive(
        &archive,
        &[("Report/Layout", LAYOUT), ("DataModelSchema", MODEL)],
    );

    let output = pbidoc_cmd()
        .args(["info", archive.to_str().unwrap()])
        .output()
        .expect("failed to run pbidoc");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Entries: 2"));
    assert!(stdout.contains("  - Report/Layout"));
    assert!(stdout.contains("Layout: present"));
    assert!(stdout.contains("Visuals: 1"));
}
