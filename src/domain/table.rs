//! The rectangular table produced by the extraction pipeline.
//!
//! A [`Table`] is an ordered sequence of rows of cell text. Construction
//! enforces the rectangularity invariant: every row is padded with empty
//! strings to the widest row, so downstream consumers can index columns
//! without length checks. Tables from several images concatenate row-wise,
//! re-padding to the widest contributing table.

use serde::{Deserialize, Serialize};

/// A rectangular table of recognized cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table from per-row cell text as produced by recognition.
    ///
    /// Each cell is trimmed of leading and trailing whitespace. Rows without
    /// any cells are dropped. Every remaining row is padded with empty
    /// strings to the widest row, so the result is rectangular. Padding is
    /// structural, not data loss: a row with fewer detected cells (merged
    /// cells, missing dividers) keeps its column alignment.
    pub fn from_cell_rows<R, C>(cell_rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = String>,
    {
        let mut rows: Vec<Vec<String>> = cell_rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.trim().to_string())
                    .collect::<Vec<String>>()
            })
            .filter(|row| !row.is_empty())
            .collect();

        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(column_count, String::new());
        }

        Self { rows }
    }

    /// Concatenates tables row-wise, in input order.
    ///
    /// Empty tables are skipped. The surviving rows are re-padded to the
    /// widest contributing table, so tables with differing column counts
    /// concatenate cleanly. When every input is empty the result is the
    /// empty table, which is the normal "nothing detected" outcome.
    pub fn concatenate<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Table>,
    {
        let contributing: Vec<Table> = tables.into_iter().filter(|t| !t.is_empty()).collect();
        let column_count = contributing
            .iter()
            .map(Table::column_count)
            .max()
            .unwrap_or(0);

        let mut rows = Vec::new();
        for table in contributing {
            for mut row in table.rows {
                row.resize(column_count, String::new());
                rows.push(row);
            }
        }

        Self { rows }
    }

    /// The rows of the table, each exactly [`Table::column_count`] cells wide.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// The number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns, derived from the (identical) row widths.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the table, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}
