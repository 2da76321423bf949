use anyhow::{Context, Result};
use pbidoc::{ReportContainer, ReportPackage};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

pub fn run(archive: &str) -> Result<ExitCode> {
    let mut container = ReportContainer::open_from_path(archive)
        .with_context(|| format!("Failed to open report archive: {}", archive))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let filename = Path::new(archive)
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| archive.into());

    writeln!(handle, "Archive: {}", filename)?;
    writeln!(handle, "Entries: {}", container.len())?;
    let names: Vec<String> = container.file_names().map(|n| n.to_string()).collect();
    for name in &names {
        writeln!(handle, "  - {}", name)?;
    }

    let pkg = ReportPackage::from_container(&mut container);
    writeln!(handle)?;
    writeln!(
        handle,
        "Layout: {}",
        if pkg.has_layout() { "present" } else { "absent or unreadable" }
    )?;
    writeln!(
        handle,
        "Model schema: {}",
        if pkg.has_model() { "present" } else { "absent or unreadable" }
    )?;

    let doc = pkg.documentation();
    writeln!(handle, "Tables referenced by visuals: {}", doc.tables.len())?;
    writeln!(handle, "Tables with DAX calculations: {}", doc.calculations.len())?;
    writeln!(handle, "Visuals: {}", doc.visuals.len())?;
    writeln!(
        handle,
        "Filters: {} report-level, {} pages, {} pages with visual filters",
        doc.filters.report.len(),
        doc.filters.pages.values().filter(|f| !f.is_empty()).count(),
        doc.filters
            .visuals
            .values()
            .filter(|v| v.values().any(|f| !f.is_empty()))
            .count()
    )?;

    Ok(ExitCode::SUCCESS)
}
