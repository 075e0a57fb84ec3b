//! YAML seed file loader.
//!
//! A seed file carries rows for any subset of tables and, optionally, its own
//! table definitions:
//!
//! ```yaml
//! database: schooldb
//! rows:
//!   nations:
//!     - ["United States", "US"]
//!   states:
//!     - ["Pennsylvania", "PA", {lookup: nations_id, args: [US]}]
//!   tasks:
//!     - ["HRM 101 QUIZ 1", {raw: "100"}, true]
//! ```
//!
//! Cells map to [`SqlValue`]s: strings are text, booleans and numbers are
//! unquoted, `null` is `NULL`, `{raw: ...}` is inserted verbatim and
//! `{lookup: ...}` is a natural-key subquery, either a named schooldb
//! resolver or a generic `{table, id, where}` form.

use super::SeedData;
use crate::codegen::types::{Catalog, TableDef};
use crate::error::{FillerError, Result};
use crate::lookup::{resolve_named, Lookup};
use crate::value::{Row, SqlValue};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Raw structure of a seed file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedSpec {
    #[serde(default)]
    database: Option<String>,
    #[serde(default)]
    tables: Option<Vec<TableDef>>,
    #[serde(default)]
    rows: IndexMap<String, Vec<Vec<Value>>>,
}

/// A loaded seed file: target database, catalog and rows
#[derive(Debug, Clone)]
pub struct SeedFile {
    pub database: Option<String>,
    pub catalog: Catalog,
    pub seed: SeedData,
}

/// Load a seed file from disk
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedFile> {
    let path = path.as_ref();

    let yaml_content = fs::read_to_string(path).map_err(|source| FillerError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let spec: SeedSpec = serde_yaml::from_str(&yaml_content).map_err(|source| FillerError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;

    let seed_file = build_seed_file(spec)?;
    tracing::info!(
        path = %path.display(),
        tables = seed_file.seed.tables().count(),
        rows = seed_file.seed.total_rows(),
        "loaded seed file"
    );

    Ok(seed_file)
}

/// Parse seed file contents without touching the filesystem
pub fn parse_seed_str(yaml_content: &str) -> Result<SeedFile> {
    let spec: SeedSpec = serde_yaml::from_str(yaml_content).map_err(|source| FillerError::Yaml {
        path: "<inline>".into(),
        source,
    })?;
    build_seed_file(spec)
}

fn build_seed_file(spec: SeedSpec) -> Result<SeedFile> {
    let catalog = match spec.tables {
        Some(tables) => Catalog::from_tables(tables)?,
        None => crate::catalog::schooldb(),
    };

    let mut seed = SeedData::new();
    for (name, raw_rows) in spec.rows {
        // Accept `instructor_logins` for `instructor-logins`
        let table = catalog
            .find(&name)
            .ok_or_else(|| FillerError::UnknownTable(name.clone()))?;

        let rows = raw_rows
            .iter()
            .map(|cells| convert_row(&table.name, cells))
            .collect::<Result<Vec<Row>>>()?;

        seed.insert(table.name.clone(), rows);
    }

    Ok(SeedFile {
        database: spec.database,
        catalog,
        seed,
    })
}

fn convert_row(table: &str, cells: &[Value]) -> Result<Row> {
    cells.iter().map(|cell| convert_cell(table, cell)).collect()
}

/// Convert one YAML cell into a SQL value
fn convert_cell(table: &str, cell: &Value) -> Result<SqlValue> {
    match cell {
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Bool(b) => Ok(SqlValue::Bool(*b)),
        Value::Number(n) => Ok(SqlValue::Number(n.to_string())),
        Value::Null => Ok(SqlValue::Null),
        Value::Mapping(map) => {
            if let Some(raw) = map.get("raw") {
                return Ok(SqlValue::Number(scalar_text(table, raw)?));
            }
            if map.contains_key("lookup") {
                return Ok(SqlValue::Lookup(convert_lookup(table, cell)?));
            }
            Err(invalid(table, "mapping cell must have a 'raw' or 'lookup' key"))
        }
        _ => Err(invalid(table, &format!("unsupported cell {:?}", cell))),
    }
}

/// Convert a `{lookup: ...}` mapping.
///
/// Two forms:
/// - `{lookup: students_id, args: [Luis Rico, BU]}` calls a named resolver
/// - `{lookup: {table: t, id: t_id, where: {col: value}}}` builds one directly
fn convert_lookup(table: &str, cell: &Value) -> Result<Lookup> {
    let Value::Mapping(map) = cell else {
        return Err(invalid(table, "lookup must be a mapping"));
    };

    match map.get("lookup") {
        Some(Value::String(name)) => {
            let args = match map.get("args") {
                Some(Value::Sequence(seq)) => seq
                    .iter()
                    .map(|arg| scalar_text(table, arg))
                    .collect::<Result<Vec<String>>>()?,
                Some(other) => vec![scalar_text(table, other)?],
                None => Vec::new(),
            };
            resolve_named(name, &args)
        }
        Some(Value::Mapping(generic)) => {
            let lookup_table = required_str(table, generic, "table")?;
            let id_column = required_str(table, generic, "id")?;
            let mut lookup = Lookup::new(lookup_table, id_column);

            let Some(Value::Mapping(filters)) = generic.get("where") else {
                return Err(invalid(table, "generic lookup needs a 'where' mapping"));
            };

            for (column, value) in filters {
                let Value::String(column) = column else {
                    return Err(invalid(table, "lookup filter column must be a string"));
                };
                lookup = match value {
                    Value::String(s) => lookup.where_text(column.as_str(), s.as_str()),
                    Value::Number(n) => lookup.where_raw(column.as_str(), n.to_string()),
                    Value::Bool(b) => lookup.where_raw(column.as_str(), b.to_string()),
                    Value::Mapping(_) => {
                        lookup.where_lookup(column.as_str(), convert_lookup(table, value)?)
                    }
                    _ => {
                        return Err(invalid(
                            table,
                            &format!("unsupported filter value for '{}'", column),
                        ))
                    }
                };
            }

            Ok(lookup)
        }
        _ => Err(invalid(table, "'lookup' must be a resolver name or a mapping")),
    }
}

fn required_str<'a>(table: &str, map: &'a serde_yaml::Mapping, key: &str) -> Result<&'a str> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s.as_str()),
        _ => Err(invalid(table, &format!("generic lookup is missing '{}'", key))),
    }
}

fn scalar_text(table: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(invalid(table, &format!("expected a scalar, got {:?}", value))),
    }
}

fn invalid(table: &str, reason: &str) -> FillerError {
    FillerError::InvalidValue {
        table: table.to_string(),
        reason: reason.to_string(),
    }
}
