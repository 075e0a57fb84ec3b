//! schoolfill CLI - seed-data SQL generation for schooldb
//!
//! Prints a script of `INSERT` statements meant to be piped into a SQL client
//! after the schema has been created:
//!
//! ```text
//! (cat init.sql && schoolfill generate) | mysql -u root -p
//! ```

use clap::{Parser, Subcommand};
use schoolfill::codegen::{check_row_references, generate_script, write_script, DependencyGraph};
use schoolfill::config::{CliOverrides, FillerConfig, ResolvedConfig};
use schoolfill::{catalog, load_seed_file, Catalog, FillerError, SeedData};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "schoolfill")]
#[command(version, about = "Seed-data SQL generation for the schooldb schema", long_about = None)]
struct Cli {
    /// Path to schoolfill.yaml (default: ./schoolfill.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed file with rows (default: built-in schooldb dataset)
    #[arg(short, long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seed script
    Generate {
        /// Database selected with USE
        #[arg(short, long)]
        database: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the BEGIN/COMMIT wrapper
        #[arg(long)]
        no_transaction: bool,

        /// Double single quotes inside text values
        #[arg(long)]
        escape_quotes: bool,
    },

    /// Show table dependency levels and row counts
    Plan {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Verify emission order and row lookup references
    Check,
}

/// Loaded inputs for any subcommand
struct Inputs {
    catalog: Catalog,
    seed: SeedData,
    seed_database: Option<String>,
}

fn main() {
    dotenv::dotenv().ok();

    // stdout carries the SQL; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { database, output, no_transaction, escape_quotes } => {
            let overrides = CliOverrides {
                database,
                seed: cli.seed,
                no_transaction,
                escape_quotes,
            };
            generate(cli.config, overrides, output)
        }
        Commands::Plan { json } => {
            let overrides = CliOverrides {
                seed: cli.seed,
                ..Default::default()
            };
            plan(cli.config, overrides, json)
        }
        Commands::Check => {
            let overrides = CliOverrides {
                seed: cli.seed,
                ..Default::default()
            };
            check(cli.config, overrides)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_inputs(
    config_path: Option<PathBuf>,
    overrides: &CliOverrides,
) -> Result<(ResolvedConfig, Inputs), FillerError> {
    let config = FillerConfig::load(config_path.as_deref())?;
    let resolved = ResolvedConfig::resolve(overrides, &config);

    let inputs = match &resolved.seed {
        Some(path) => {
            let file = load_seed_file(path)?;
            Inputs {
                catalog: file.catalog,
                seed: file.seed,
                seed_database: file.database,
            }
        }
        None => {
            tracing::info!("using built-in schooldb dataset");
            Inputs {
                catalog: catalog::schooldb(),
                seed: schoolfill::seed::schooldb::seed_data(),
                seed_database: None,
            }
        }
    };

    Ok((resolved, inputs))
}

/// Generate the seed script
fn generate(
    config_path: Option<PathBuf>,
    overrides: CliOverrides,
    output: Option<PathBuf>,
) -> Result<(), FillerError> {
    let (resolved, inputs) = load_inputs(config_path, &overrides)?;
    let opts = resolved.script_options(inputs.seed_database.as_deref());

    let script = generate_script(&inputs.catalog, &inputs.seed, &opts)?;
    write_script(&script, output.as_deref())?;

    if let Some(path) = output {
        eprintln!("Wrote {} rows to {}", inputs.seed.total_rows(), path.display());
    }

    Ok(())
}

#[derive(Serialize)]
struct PlanEntry {
    table: String,
    level: usize,
    depends_on: Vec<String>,
    rows: usize,
}

/// Print dependency levels and row counts
fn plan(config_path: Option<PathBuf>, overrides: CliOverrides, json: bool) -> Result<(), FillerError> {
    let (_, inputs) = load_inputs(config_path, &overrides)?;
    let graph = DependencyGraph::build(&inputs.catalog)?;

    let entries: Vec<PlanEntry> = inputs
        .catalog
        .tables()
        .map(|table| {
            let node = &graph.nodes[&table.name];
            PlanEntry {
                table: table.name.clone(),
                level: node.level,
                depends_on: node.depends_on.clone(),
                rows: inputs.seed.rows(&table.name).len(),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (level, tables) in graph.levels.iter().enumerate() {
        println!("Level {}:", level);
        for entry in entries.iter().filter(|e| tables.contains(&e.table)) {
            if entry.depends_on.is_empty() {
                println!("  {} ({} rows)", entry.table, entry.rows);
            } else {
                println!(
                    "  {} ({} rows) <- {}",
                    entry.table,
                    entry.rows,
                    entry.depends_on.join(", ")
                );
            }
        }
    }

    Ok(())
}

/// Verify catalog order and that no row looks up a later table
fn check(config_path: Option<PathBuf>, overrides: CliOverrides) -> Result<(), FillerError> {
    let (_, inputs) = load_inputs(config_path, &overrides)?;

    let graph = DependencyGraph::build(&inputs.catalog)?;
    graph.verify_order(&inputs.catalog.names())?;
    println!("✓ {} tables in dependency order", inputs.catalog.len());

    for (table, _) in inputs.seed.tables() {
        if inputs.catalog.get(table).is_none() {
            return Err(FillerError::UnknownTable(table.clone()));
        }
    }

    let problems = check_row_references(&inputs.catalog, &inputs.seed);
    if problems.is_empty() {
        println!("✓ {} rows reference only earlier tables", inputs.seed.total_rows());
        return Ok(());
    }

    for problem in &problems {
        eprintln!(
            "  ✗ {} row {} looks up '{}', which is not emitted before it",
            problem.table, problem.row, problem.referenced
        );
    }

    Err(FillerError::InvalidValue {
        table: problems[0].table.clone(),
        reason: format!("{} forward lookup reference(s)", problems.len()),
    })
}
