use anyhow::{Context, Result};
use pbidoc::ReportPackage;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::OutputFormat;

pub fn run(archive: &str, output: Option<&str>, format: OutputFormat) -> Result<ExitCode> {
    let pkg = ReportPackage::open_path(archive)
        .with_context(|| format!("Failed to open report archive: {}", archive))?;

    let rendered = match format {
        OutputFormat::Markdown => pkg.generate_documentation(),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&pkg.documentation())
                .context("Failed to serialize documentation")?;
            json.push('\n');
            json
        }
    };

    let out_path = match output {
        Some(path) => PathBuf::from(path),
        None => default_output_path(archive, format),
    };

    std::fs::write(&out_path, rendered)
        .with_context(|| format!("Failed to write documentation: {}", out_path.display()))?;

    println!("Documentation written to {}", out_path.display());
    Ok(ExitCode::SUCCESS)
}

fn default_output_path(archive: &str, format: OutputFormat) -> PathBuf {
    let extension = match format {
        OutputFormat::Markdown => "md",
        OutputFormat::Json => "json",
    };
    Path::new(archive).with_extension(extension)
}
