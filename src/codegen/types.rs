//! Table definitions.
//!
//! These types describe the target schema as far as the generator needs it:
//! table names, column order and foreign-key references. They can be
//! declared in code (see [`crate::catalog`]) or loaded from a seed file.

use crate::codegen::utils::{is_valid_identifier, normalize_table_name};
use crate::error::{FillerError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One target table
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableDef {
    /// Table name as it appears in the schema
    pub name: String,
    /// Primary key column, for tables that are looked up by natural key
    #[serde(default)]
    pub id_column: Option<String>,
    /// Columns written by each `INSERT`, in order
    pub columns: Vec<String>,
    /// Tables this table's foreign keys point at
    #[serde(default)]
    pub references: Vec<String>,
}

impl TableDef {
    pub fn new(name: &str, columns: &[&str]) -> Self {
        TableDef {
            name: name.to_string(),
            id_column: None,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            references: Vec::new(),
        }
    }

    pub fn with_id(mut self, id_column: &str) -> Self {
        self.id_column = Some(id_column.to_string());
        self
    }

    pub fn referencing(mut self, tables: &[&str]) -> Self {
        self.references = tables.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Check that every name can be backtick-quoted and columns exist
    pub fn validate(&self) -> Result<()> {
        if !is_valid_identifier(&self.name) {
            return Err(FillerError::InvalidIdentifier(self.name.clone()));
        }

        if self.columns.is_empty() {
            return Err(FillerError::InvalidValue {
                table: self.name.clone(),
                reason: "table defines no columns".to_string(),
            });
        }

        for column in self.columns.iter().chain(self.id_column.iter()) {
            if !is_valid_identifier(column) {
                return Err(FillerError::InvalidIdentifier(column.clone()));
            }
        }

        Ok(())
    }
}

/// Ordered set of table definitions; insertion order is emission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: IndexMap<String, TableDef>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Build a catalog from definitions, validating each one
    pub fn from_tables(tables: Vec<TableDef>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for table in tables {
            table.validate()?;
            catalog.push(table);
        }
        Ok(catalog)
    }

    /// Append a table; a table with the same name is replaced in place
    pub fn push(&mut self, table: TableDef) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn get(&self, name: &str) -> Option<&TableDef> {
        self.tables.get(name)
    }

    /// Find a table by exact or normalized name (`instructor_logins`)
    pub fn find(&self, name: &str) -> Option<&TableDef> {
        if let Some(table) = self.tables.get(name) {
            return Some(table);
        }
        let wanted = normalize_table_name(name);
        self.tables
            .values()
            .find(|t| normalize_table_name(&t.name) == wanted)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.tables.get_index_of(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_table() {
        let table = TableDef::new("instructor-logins", &["instructor-logins_string"]);
        assert!(table.validate().is_ok());

        let table = TableDef::new("bad`table", &["a"]);
        assert!(matches!(table.validate(), Err(FillerError::InvalidIdentifier(_))));

        let table = TableDef::new("empty", &[]);
        assert!(table.validate().is_err());

        let table = TableDef::new("t", &["a"]).with_id("id; DROP");
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let mut catalog = Catalog::new();
        catalog.push(TableDef::new("b", &["x"]));
        catalog.push(TableDef::new("a", &["y"]));

        assert_eq!(catalog.names(), vec!["b", "a"]);
        assert_eq!(catalog.position("a"), Some(1));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_find_normalized() {
        let mut catalog = Catalog::new();
        catalog.push(TableDef::new("student-logins", &["x"]));

        assert!(catalog.find("student-logins").is_some());
        assert!(catalog.find("student_logins").is_some());
        assert!(catalog.find("students").is_none());
    }

    #[test]
    fn test_table_def_from_yaml() {
        let yaml = r#"
name: courses
id_column: courses_id
columns: [courses_title, courses_number]
references: [departments]
"#;
        let table: TableDef = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(table.name, "courses");
        assert_eq!(table.id_column.as_deref(), Some("courses_id"));
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.references, vec!["departments"]);
    }
}
