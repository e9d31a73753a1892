//! Table types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Declared number of rows
    #[serde(default)]
    pub rows: u32,

    /// Declared number of columns
    #[serde(default)]
    pub columns: u32,

    /// Rows in the table
    #[serde(default)]
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table of plain-text cells.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for row in rows {
            table.add_row(TableRow::from_strings(row));
        }
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.columns = self.columns.max(row.table_cells.len() as u32);
        self.table_rows.push(row);
        self.rows = self.table_rows.len() as u32;
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.table_rows
            .first()
            .map(|r| r.table_cells.len())
            .unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in the row
    #[serde(default)]
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { table_cells: cells }
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }
}

/// A table cell. Its content is a nested body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    /// Cell content
    #[serde(default)]
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell holding one plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(vec![Paragraph::with_text(text).into()])
    }

    /// Create a cell with arbitrary content.
    pub fn with_content(content: Vec<StructuralElement>) -> Self {
        Self { content }
    }

    /// Check if the cell has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
