//! Seed record tables.
//!
//! [`SeedData`] maps table names to their rows. The built-in schooldb dataset
//! lives in [`schooldb`]; [`yaml_loader`] reads the same structure from a file.

pub mod schooldb;
pub mod yaml_loader;

use crate::value::Row;
use indexmap::IndexMap;

pub use yaml_loader::{load_seed_file, SeedFile};

/// Rows to insert, keyed by table name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    tables: IndexMap<String, Vec<Row>>,
}

impl SeedData {
    pub fn new() -> Self {
        SeedData::default()
    }

    /// Set the rows for a table, replacing any previous rows
    pub fn insert(&mut self, table: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(table.into(), rows);
    }

    /// Rows for a table; empty when the table has no seed rows
    pub fn rows(&self, table: &str) -> &[Row] {
        self.tables.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tables(&self) -> impl Iterator<Item = (&String, &Vec<Row>)> {
        self.tables.iter()
    }

    pub fn total_rows(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}
