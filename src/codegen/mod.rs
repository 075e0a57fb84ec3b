//! SQL generation for seed data.
//!
//! Table definitions plus rows go in, an `INSERT` script comes out. One
//! generic template covers every table; per-table behavior lives only in the
//! table definitions and the rows.

pub mod types;
pub mod utils;
pub mod insert;
pub mod dependency_graph;
pub mod script;
pub mod fs_utils;

// Re-export key types
pub use types::{Catalog, TableDef};
pub use utils::RenderOptions;
pub use insert::generate_inserts;
pub use dependency_graph::{check_row_references, DependencyGraph, ForwardReference};
pub use script::{generate_script, ScriptOptions};
pub use fs_utils::write_script;
