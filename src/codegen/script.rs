//! Seed script assembly.
//!
//! The script selects the database, opens a transaction, emits every table's
//! inserts in catalog order and commits:
//!
//! ```text
//! USE `schooldb`
//! BEGIN;
//!
//! INSERT INTO `nations` ...
//!
//! INSERT INTO `states` ...
//!
//! ...
//!
//! COMMIT;
//! ```
//!
//! Each table block is followed by a blank line, so a table without rows
//! shows up as an empty line. `USE` carries no semicolon; the mysql client
//! treats it as a line command.

use super::dependency_graph::DependencyGraph;
use super::insert::generate_inserts;
use super::types::Catalog;
use super::utils::{quote_identifier, RenderOptions};
use crate::catalog::DEFAULT_DATABASE;
use crate::error::{FillerError, Result};
use crate::seed::SeedData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Database selected with `USE`
    pub database: String,
    /// Wrap the inserts in `BEGIN;` / `COMMIT;`
    pub transaction: bool,
    pub render: RenderOptions,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            database: DEFAULT_DATABASE.to_string(),
            transaction: true,
            render: RenderOptions::default(),
        }
    }
}

/// Build the complete seed script
pub fn generate_script(catalog: &Catalog, seed: &SeedData, opts: &ScriptOptions) -> Result<String> {
    for (table, _) in seed.tables() {
        if catalog.get(table).is_none() {
            return Err(FillerError::UnknownTable(table.clone()));
        }
    }

    let graph = DependencyGraph::build(catalog)?;
    graph.verify_order(&catalog.names())?;

    let mut script = String::new();
    script.push_str(&format!("USE {}\n", quote_identifier(&opts.database)));
    if opts.transaction {
        script.push_str("BEGIN;\n");
    }
    script.push('\n');

    for table in catalog.tables() {
        script.push_str(&generate_inserts(table, seed.rows(&table.name), &opts.render));
        script.push('\n');
    }

    script.push('\n');
    if opts.transaction {
        script.push_str("COMMIT;\n");
    }

    tracing::info!(
        database = %opts.database,
        tables = catalog.len(),
        rows = seed.total_rows(),
        "assembled seed script"
    );

    Ok(script)
}
