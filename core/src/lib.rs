//! Pbidoc: documentation generation for Power BI report archives.
//!
//! This crate provides functionality for:
//! - Opening `.pbix`-style zip archives and reading their JSON parts
//! - Extracting tables, DAX calculations, visuals, and filters from the
//!   `Report/Layout` and `DataModelSchema` payloads
//! - Rendering the extracted structure as a Markdown document
//!
//! # Quick Start
//!
//! ```ignore
//! use pbidoc::ReportPackage;
//!
//! let pkg = ReportPackage::open_path("report.pbix")?;
//! let markdown = pkg.generate_documentation();
//! std::fs::write("report.md", markdown)?;
//! ```

mod container;
mod error_codes;
mod extract;
mod json_access;
mod layout;
mod model_schema;
mod package;
mod render;

pub use container::{ContainerError, ContainerLimits, ReportContainer};
pub use extract::{
    FilterEntry, FilterSet, TableCalculations, TableSummary, UNNAMED_VISUAL, VisualInfo,
    dax_calculations, filter_set, normalize_filters, table_summaries, visual_details,
};
pub use json_access::{array_at, parse_json_text, str_at, strip_bom, value_at};
pub use layout::{LayoutDocument, Section, Visual};
pub use model_schema::{ModelDocument, ModelTable};
pub use package::{DATA_MODEL_SCHEMA_PART, Documentation, REPORT_LAYOUT_PART, ReportPackage};
pub use render::render_markdown;
