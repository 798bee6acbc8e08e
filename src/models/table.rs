//! Table column descriptors and accessor-based cell lookup.
//!
//! A [`TableColumn`] pairs a display header with an accessor naming a field
//! of the serialized row (`"score"`, `"dailyChange"`, ...). Lookups never
//! fail: an accessor that names no field of the row resolves to nothing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

// ---------------------------------------------------------------------------
// TableColumn
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    #[serde(rename = "Header")]
    pub header: String,
    pub accessor: String,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, accessor: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor: accessor.into(),
        }
    }

    /// Extract this column's value from a row.
    ///
    /// The row is looked up in its serialized form, so accessors use the
    /// wire names (`lastUpdate`, not `last_update`). Returns `None` when the
    /// accessor names no field of the row.
    pub fn cell<T: Serialize>(&self, row: &T) -> Option<Value> {
        let value = serde_json::to_value(row).ok()?;
        value.get(&self.accessor).cloned()
    }

    /// Whether the accessor names a field of `row`.
    pub fn applies_to<T: Serialize>(&self, row: &T) -> bool {
        self.cell(row).is_some()
    }
}

/// The standard column set for [`TrendsData`](super::TrendsData) rows.
pub fn trends_columns() -> Vec<TableColumn> {
    vec![
        TableColumn::new("Name", "name"),
        TableColumn::new("Geo", "geo"),
        TableColumn::new("Score", "score"),
        TableColumn::new("Daily Change", "dailyChange"),
        TableColumn::new("Weekly Change", "weeklyChange"),
        TableColumn::new("Monthly Change", "monthlyChange"),
        TableColumn::new("Last Update", "lastUpdate"),
    ]
}

/// Project rows into cells, one inner vector per row and one cell per column.
///
/// Unresolved accessors produce `Value::Null`.
pub fn project_rows<T: Serialize>(columns: &[TableColumn], rows: &[T]) -> Vec<Vec<Value>> {
    rows.iter()
        .map(|row| {
            let value = serde_json::to_value(row).unwrap_or(Value::Null);
            columns
                .iter()
                .map(|c| value.get(&c.accessor).cloned().unwrap_or(Value::Null))
                .collect()
        })
        .collect()
}

/// Write rows as CSV with a header line built from the column headers.
pub fn write_csv<T, W>(columns: &[TableColumn], rows: &[T], writer: W) -> Result<()>
where
    T: Serialize,
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(columns.iter().map(|c| c.header.as_str()))?;
    for cells in project_rows(columns, rows) {
        wtr.write_record(cells.iter().map(cell_text))?;
    }
    wtr.flush()?;
    Ok(())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
