//! Table types.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A table of text cells, indexed `[row][column]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Cells in row-major order
    pub cells: Vec<Vec<String>>,

    /// Draw vertical and horizontal rules
    #[serde(default)]
    pub borders: bool,

    /// Float the table in a right-aligned wrapped figure
    #[serde(default)]
    pub wrap: bool,
}

impl Table {
    /// Create a table from rows of cells.
    pub fn new<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            borders: false,
            wrap: false,
        }
    }

    /// Enable or disable borders.
    pub fn with_borders(mut self, borders: bool) -> Self {
        self.borders = borders;
        self
    }

    /// Enable or disable figure wrapping.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Add a row to the table.
    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.cells.push(row.into_iter().map(Into::into).collect());
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the number of columns (based on first row).
    pub fn column_count(&self) -> usize {
        self.cells.first().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell by row and column.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Check that every row has the same number of columns.
    pub fn validate(&self) -> Result<()> {
        let expected = self.column_count();
        for (i, row) in self.cells.iter().enumerate() {
            if row.len() != expected {
                return Err(Error::InvalidTable(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    expected
                )));
            }
        }
        Ok(())
    }
}
