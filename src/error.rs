//! Error types for seed generation.
//!
//! Generated SQL is never validated against the target schema; these errors
//! cover the inputs the generator itself reads (catalog, seed files, config).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading inputs or assembling a script.
#[derive(Debug, Error)]
pub enum FillerError {
    /// Reading or writing a file failed.
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A YAML config or seed file could not be parsed.
    #[error("Failed to parse {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// JSON rendering of the plan failed.
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed data names a table the catalog does not define.
    #[error("Unknown table '{0}'")]
    UnknownTable(String),

    /// The table references form a cycle.
    #[error("Circular dependency detected involving tables: {0:?}")]
    CircularDependency(Vec<String>),

    /// A table is emitted before a table it references.
    #[error("Table '{table}' is emitted before '{dependency}', which it references")]
    OrderViolation { table: String, dependency: String },

    /// A seed file names a resolver that does not exist.
    #[error("Unknown resolver '{0}'")]
    UnknownResolver(String),

    /// A named resolver was given the wrong number of arguments.
    #[error("Resolver '{name}' expects {expected} argument(s), got {actual}")]
    ResolverArity {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// A seed cell could not be turned into a SQL value.
    #[error("Invalid value in table '{table}': {reason}")]
    InvalidValue { table: String, reason: String },

    /// A table or column name cannot be safely backtick-quoted.
    #[error("Invalid identifier '{0}'")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, FillerError>;
