//! The four extraction passes over the parsed report documents.
//!
//! Each pass is an independent, read-only walk that returns its own result
//! structure; failures never cross a pass boundary. A pass whose source
//! document is absent degrades to the empty form of its result through
//! [`pass_or_default`].

mod calculations;
mod filters;
mod tables;
mod visuals;

pub use calculations::{TableCalculations, dax_calculations};
pub use filters::{FilterEntry, FilterSet, UNNAMED_VISUAL, filter_set, normalize_filters};
pub use tables::{TableSummary, table_summaries};
pub use visuals::{VisualInfo, visual_details};
pub(crate) use visuals::colors_is_empty;

use tracing::warn;

/// Runs one extraction pass against its source document, or returns the
/// pass's default when the document is unavailable.
pub(crate) fn pass_or_default<D, T: Default>(
    pass: &str,
    doc: Option<&D>,
    extract: impl FnOnce(&D) -> T,
) -> T {
    match doc {
        Some(doc) => extract(doc),
        None => {
            warn!(pass, "source document unavailable; returning empty result");
            T::default()
        }
    }
}
