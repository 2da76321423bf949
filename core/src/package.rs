//! The report package: one opened archive, both documents parsed once,
//! the four extraction passes, and the rendered document.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::container::{ContainerError, ContainerLimits, ReportContainer};
use crate::extract::{
    FilterSet, TableCalculations, TableSummary, VisualInfo, dax_calculations, filter_set,
    pass_or_default, table_summaries, visual_details,
};
use crate::layout::LayoutDocument;
use crate::model_schema::ModelDocument;
use crate::render::render_markdown;

pub const REPORT_LAYOUT_PART: &str = "Report/Layout";
pub const DATA_MODEL_SCHEMA_PART: &str = "DataModelSchema";

/// The four extraction results for one documentation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Documentation {
    pub tables: IndexMap<String, TableSummary>,
    pub calculations: IndexMap<String, TableCalculations>,
    pub visuals: Vec<VisualInfo>,
    pub filters: FilterSet,
}

/// An opened report archive with its two JSON parts parsed best-effort.
///
/// A missing or unparsable part degrades to `None` (each extraction pass
/// depending on it then returns its empty result); only a broken container
/// fails `open`.
#[derive(Debug, Clone)]
pub struct ReportPackage {
    layout: Option<LayoutDocument>,
    model: Option<ModelDocument>,
}

impl ReportPackage {
    pub fn open<R: std::io::Read + std::io::Seek + 'static>(
        reader: R,
    ) -> Result<ReportPackage, ContainerError> {
        Self::open_with_limits(reader, ContainerLimits::default())
    }

    pub fn open_with_limits<R: std::io::Read + std::io::Seek + 'static>(
        reader: R,
        limits: ContainerLimits,
    ) -> Result<ReportPackage, ContainerError> {
        let mut container = ReportContainer::open_from_reader_with_limits(reader, limits)?;
        Ok(Self::from_container(&mut container))
    }

    pub fn open_path(path: impl AsRef<std::path::Path>) -> Result<ReportPackage, ContainerError> {
        let file = std::fs::File::open(path)?;
        Self::open(file)
    }

    pub fn from_container(container: &mut ReportContainer) -> ReportPackage {
        ReportPackage {
            layout: read_part(container, REPORT_LAYOUT_PART, LayoutDocument::parse),
            model: read_part(container, DATA_MODEL_SCHEMA_PART, ModelDocument::parse),
        }
    }

    pub fn from_documents(
        layout: Option<LayoutDocument>,
        model: Option<ModelDocument>,
    ) -> ReportPackage {
        ReportPackage { layout, model }
    }

    pub fn has_layout(&self) -> bool {
        self.layout.is_some()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn table_summaries(&self) -> IndexMap<String, TableSummary> {
        pass_or_default("tables", self.layout.as_ref(), table_summaries)
    }

    pub fn dax_calculations(&self) -> IndexMap<String, TableCalculations> {
        pass_or_default("calculations", self.model.as_ref(), dax_calculations)
    }

    pub fn visual_details(&self) -> Vec<VisualInfo> {
        pass_or_default("visuals", self.layout.as_ref(), visual_details)
    }

    pub fn filters(&self) -> FilterSet {
        pass_or_default("filters", self.layout.as_ref(), filter_set)
    }

    pub fn documentation(&self) -> Documentation {
        Documentation {
            tables: self.table_summaries(),
            calculations: self.dax_calculations(),
            visuals: self.visual_details(),
            filters: self.filters(),
        }
    }

    pub fn generate_documentation(&self) -> String {
        render_markdown(&self.documentation())
    }
}

fn read_part<T>(
    container: &mut ReportContainer,
    name: &str,
    parse: impl FnOnce(&str) -> Result<T, serde_json::Error>,
) -> Option<T> {
    let text = match container.read_part_text_optional(name) {
        Ok(Some(text)) => text,
        Ok(None) => {
            warn!(part = name, "part absent from archive");
            return None;
        }
        Err(e) => {
            warn!(part = name, code = e.code(), error = %e, "failed to read part");
            return None;
        }
    };

    match parse(&text) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!(part = name, error = %e, "failed to parse part as JSON");
            None
        }
    }
}
