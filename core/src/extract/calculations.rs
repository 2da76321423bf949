//! DAX calculation extraction: measures and calculated columns per table.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model_schema::ModelDocument;

#[derive(Debug, Clone, Default, Serialize)]
pub struct TableCalculations {
    /// Measure name → expression, first-seen order, last write wins.
    pub measures: IndexMap<String, String>,
    /// Calculated-column name → expression, first-seen order, last write wins.
    pub calculated_columns: IndexMap<String, String>,
}

impl TableCalculations {
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty() && self.calculated_columns.is_empty()
    }
}

/// Collects per-table measures and calculated columns in document order.
///
/// A table appears in the result only if it contributes at least one measure
/// or calculated column.
pub fn dax_calculations(model: &ModelDocument) -> IndexMap<String, TableCalculations> {
    let mut result: IndexMap<String, TableCalculations> = IndexMap::new();

    for table in model.tables() {
        let mut calcs = TableCalculations::default();
        for (name, expression) in table.measures() {
            calcs.measures.insert(name.to_string(), expression.to_string());
        }
        for (name, expression) in table.calculated_columns() {
            calcs
                .calculated_columns
                .insert(name.to_string(), expression.to_string());
        }
        if !calcs.is_empty() {
            result.insert(table.name().to_string(), calcs);
        }
    }

    result
}
