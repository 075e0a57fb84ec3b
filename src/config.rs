//! Configuration for the schoolfill CLI.
//!
//! Settings come from, in order of precedence: command-line flags,
//! environment variables (`SCHOOLFILL_DATABASE`, `SCHOOLFILL_SEED`, also read
//! from `.env`), the optional `schoolfill.yaml` file, and built-in defaults.
//!
//! ```yaml
//! database: schooldb
//! transaction: true
//! escape_quotes: false
//! seed: config/seeds/schooldb.yaml
//! ```

use crate::catalog::DEFAULT_DATABASE;
use crate::codegen::{RenderOptions, ScriptOptions};
use crate::error::{FillerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "schoolfill.yaml";
pub const DATABASE_ENV: &str = "SCHOOLFILL_DATABASE";
pub const SEED_ENV: &str = "SCHOOLFILL_SEED";

/// Contents of `schoolfill.yaml`; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FillerConfig {
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub transaction: Option<bool>,
    #[serde(default)]
    pub escape_quotes: Option<bool>,
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

impl FillerConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| FillerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: FillerConfig =
            serde_yaml::from_str(&contents).map_err(|source| FillerError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;

        // Seed paths are relative to the config file
        if let (Some(seed), Some(dir)) = (config.seed.as_mut(), path.parent()) {
            if seed.is_relative() {
                *seed = dir.join(&*seed);
            }
        }

        Ok(config)
    }

    /// Load an explicit config file, or `schoolfill.yaml` when it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(FillerConfig::default())
                }
            }
        }
    }
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub database: Option<String>,
    pub seed: Option<PathBuf>,
    pub no_transaction: bool,
    pub escape_quotes: bool,
}

/// Settings after applying precedence
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Database chosen by flag, env or config; `None` falls back to the seed
    /// file's database, then the default
    pub database: Option<String>,
    /// Seed file; `None` means the built-in dataset
    pub seed: Option<PathBuf>,
    pub transaction: bool,
    pub escape_quotes: bool,
}

impl ResolvedConfig {
    /// Resolve against the process environment
    pub fn resolve(cli: &CliOverrides, config: &FillerConfig) -> Self {
        Self::resolve_with_env(cli, config, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup
    pub fn resolve_with_env<F>(cli: &CliOverrides, config: &FillerConfig, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = if let Some(db) = &cli.database {
            tracing::info!(database = %db, "using database from CLI flag");
            Some(db.clone())
        } else if let Some(db) = env(DATABASE_ENV).filter(|v| !v.is_empty()) {
            tracing::info!(database = %db, "using database from {}", DATABASE_ENV);
            Some(db)
        } else if let Some(db) = &config.database {
            tracing::info!(database = %db, "using database from config file");
            Some(db.clone())
        } else {
            None
        };

        let seed = cli
            .seed
            .clone()
            .or_else(|| env(SEED_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| config.seed.clone());

        ResolvedConfig {
            database,
            seed,
            transaction: !cli.no_transaction && config.transaction.unwrap_or(true),
            escape_quotes: cli.escape_quotes || config.escape_quotes.unwrap_or(false),
        }
    }

    /// Script options, taking the seed file's database when nothing else set one
    pub fn script_options(&self, seed_database: Option<&str>) -> ScriptOptions {
        let database = self
            .database
            .clone()
            .or_else(|| seed_database.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        ScriptOptions {
            database,
            transaction: self.transaction,
            render: RenderOptions {
                escape_quotes: self.escape_quotes,
            },
        }
    }
}
