use std::fmt;

use arrow::util::pretty::pretty_format_batches;

use super::export::to_record_batch;

// ---------------------------------------------------------------------------
// FeatureFrame – the tabular transform result
// ---------------------------------------------------------------------------

/// A column-labelled numeric table: one row per input value, one column per
/// selected descriptor.
///
/// Invariant: every row has exactly `columns.len()` values, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    /// Ordered column labels.
    columns: Vec<String>,
    /// Row-major values, each row aligned to `columns`.
    rows: Vec<Vec<f64>>,
}

impl FeatureFrame {
    /// Assemble a frame from labels and row-major values.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        FeatureFrame { columns, rows }
    }

    /// Ordered column labels.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in input order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extract a single column by label.
    pub fn column(&self, label: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == label)?;
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Value at (row, column) position.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row)?.get(col).copied()
    }
}

impl fmt::Display for FeatureFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let batch = to_record_batch(self).map_err(|_| fmt::Error)?;
        let table = pretty_format_batches(&[batch]).map_err(|_| fmt::Error)?;
        write!(f, "{table}")
    }
}
