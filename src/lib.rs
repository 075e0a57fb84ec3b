//! # schoolfill: seed-data SQL for schooldb
//!
//! schoolfill turns hand-curated record tables into a plain SQL script of
//! `INSERT` statements. Foreign keys are written as natural-key lookups
//! ("BU", "James Capozzoli") that render to nested subqueries, so rows can
//! reference each other without knowing auto-increment ids:
//!
//! ```text
//! INSERT INTO `states` (`states_name`, `states_code`, `states_nations_id_fk`)
//!   VALUES ('Texas', 'TX', (SELECT nations_id FROM nations WHERE nations_code = 'US' LIMIT 1));
//! ```
//!
//! The output is meant to be piped into a SQL client after the schema exists:
//!
//! ```text
//! (cat init.sql && schoolfill generate) | mysql -u root -p
//! ```
//!
//! ## Example
//!
//! ```
//! use schoolfill::codegen::{generate_inserts, RenderOptions, TableDef};
//! use schoolfill::SqlValue;
//!
//! let nations = TableDef::new("nations", &["nations_name", "nations_code"]);
//! let rows = vec![vec![SqlValue::text("United States"), SqlValue::text("US")]];
//!
//! assert_eq!(
//!     generate_inserts(&nations, &rows, &RenderOptions::default()),
//!     "INSERT INTO `nations` (`nations_name`, `nations_code`) VALUES ('United States', 'US');\n"
//! );
//! ```

// Core modules
pub mod error;
pub mod value;
pub mod lookup;

// Schema and data
pub mod catalog;
pub mod seed;

// Configuration for the CLI
pub mod config;

// SQL generation
pub mod codegen;

// Re-export key types
pub use error::{FillerError, Result};
pub use value::{Row, SqlValue};
pub use lookup::{Lookup, FilterValue, resolve, resolve_named};
pub use seed::{SeedData, SeedFile, load_seed_file};
pub use config::{FillerConfig, ResolvedConfig};
pub use codegen::{Catalog, TableDef, RenderOptions, ScriptOptions, generate_script};
