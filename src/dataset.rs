use std::collections::HashMap;
use std::path::Path;

use crate::constants::BP_ID_COLUMN;
use crate::error::{DqError, Result};

/// An in-memory tabular Business Partner dataset.
///
/// Columns keep their input order; rows are addressed by their position,
/// which doubles as the stable `row_index` reported by validation and
/// deduplication. Cells are optional strings; blank CSV cells load as
/// `None`.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>) -> Self {
        let column_index = columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self {
            columns,
            column_index,
            rows: Vec::new(),
        }
    }

    /// Load a dataset from a headered CSV file. The `bp_id` column is
    /// mandatory.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut dataset = Dataset::new(columns);
        if !dataset.has_column(BP_ID_COLUMN) {
            return Err(DqError::MissingColumn(BP_ID_COLUMN.to_string()));
        }

        for record in reader.records() {
            let record = record?;
            let row = record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect();
            dataset.push_row(row);
        }
        Ok(dataset)
    }

    /// Write the dataset as a headered CSV file; `None` cells become empty.
    pub fn to_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.columns)?;
        for row in &self.rows {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell value at (row, column). `None` for blank cells and for columns
    /// the dataset does not have.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = *self.column_index.get(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// The record's Business Partner id; empty when the cell is blank.
    pub fn bp_id(&self, row: usize) -> &str {
        self.value(row, BP_ID_COLUMN).unwrap_or("")
    }

    /// Apply `f` to every non-blank cell of `column`. Unknown columns are a
    /// no-op.
    pub fn update_column<F>(&mut self, column: &str, f: F)
    where
        F: Fn(&str) -> String,
    {
        let Some(&idx) = self.column_index.get(column) else {
            return;
        };
        for row in &mut self.rows {
            if let Some(value) = row[idx].take() {
                row[idx] = Some(f(&value));
            }
        }
    }
}
