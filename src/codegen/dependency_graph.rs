/// Dependency graph for table emission order
///
/// Builds a directed acyclic graph (DAG) from table references
/// and computes topological levels, so a script never inserts a row
/// before the rows its lookups point at.

use super::types::Catalog;
use crate::error::{FillerError, Result};
use crate::seed::SeedData;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Serialize)]
pub struct DependencyNode {
    pub table: String,
    pub depends_on: Vec<String>,
    pub level: usize,
}

#[derive(Debug, Serialize)]
pub struct DependencyGraph {
    pub nodes: IndexMap<String, DependencyNode>,
    pub levels: Vec<Vec<String>>,
}

/// A row whose lookup reads a table that is emitted later
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForwardReference {
    pub table: String,
    pub row: usize,
    pub referenced: String,
}

impl DependencyGraph {
    /// Build dependency graph from a catalog
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let mut nodes = IndexMap::new();

        for table in catalog.tables() {
            let mut depends_on = Vec::new();

            for reference in &table.references {
                // Self references (e.g. prerequisites) and tables outside the catalog
                // do not constrain ordering
                if reference == &table.name || catalog.get(reference).is_none() {
                    continue;
                }
                if !depends_on.contains(reference) {
                    depends_on.push(reference.clone());
                }
            }

            nodes.insert(
                table.name.clone(),
                DependencyNode {
                    table: table.name.clone(),
                    depends_on,
                    level: 0, // Will be computed
                },
            );
        }

        let levels = Self::compute_levels(&nodes)?;

        for (level_num, level_tables) in levels.iter().enumerate() {
            for table_name in level_tables {
                if let Some(node) = nodes.get_mut(table_name) {
                    node.level = level_num;
                }
            }
        }

        Ok(DependencyGraph { nodes, levels })
    }

    /// Compute processing levels using topological sort (Kahn's algorithm)
    fn compute_levels(nodes: &IndexMap<String, DependencyNode>) -> Result<Vec<Vec<String>>> {
        // Reverse dependency map (who depends on this table)
        let mut reverse_deps: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut in_degree: IndexMap<String, usize> = IndexMap::new();

        for (table_name, node) in nodes {
            let valid_deps: Vec<&String> = node
                .depends_on
                .iter()
                .filter(|dep| nodes.contains_key(*dep))
                .collect();

            in_degree.insert(table_name.clone(), valid_deps.len());

            for dep in valid_deps {
                reverse_deps
                    .entry(dep.clone())
                    .or_default()
                    .push(table_name.clone());
            }
        }

        let mut queue: VecDeque<String> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(name, _)| name.clone())
            .collect();

        let mut levels: Vec<Vec<String>> = Vec::new();
        let mut processed = IndexSet::new();

        while !queue.is_empty() {
            let mut current_level = Vec::new();

            let level_size = queue.len();
            for _ in 0..level_size {
                if let Some(table_name) = queue.pop_front() {
                    current_level.push(table_name.clone());
                    processed.insert(table_name.clone());

                    if let Some(dependents) = reverse_deps.get(&table_name) {
                        for dependent in dependents {
                            if let Some(degree) = in_degree.get_mut(dependent) {
                                *degree -= 1;
                                if *degree == 0 {
                                    queue.push_back(dependent.clone());
                                }
                            }
                        }
                    }
                }
            }

            if !current_level.is_empty() {
                levels.push(current_level);
            }
        }

        if processed.len() != nodes.len() {
            let unprocessed: Vec<String> = nodes
                .keys()
                .filter(|k| !processed.contains(*k))
                .cloned()
                .collect();
            return Err(FillerError::CircularDependency(unprocessed));
        }

        Ok(levels)
    }

    /// Get tables at a specific level
    pub fn get_level(&self, level: usize) -> Option<&Vec<String>> {
        self.levels.get(level)
    }

    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// All tables in a valid processing order (flattened levels)
    pub fn processing_order(&self) -> Vec<String> {
        self.levels.iter().flatten().cloned().collect()
    }

    /// Check that every table in `order` comes after everything it depends on
    pub fn verify_order(&self, order: &[String]) -> Result<()> {
        for (position, table) in order.iter().enumerate() {
            let Some(node) = self.nodes.get(table) else {
                continue;
            };
            for dependency in &node.depends_on {
                let emitted_before = order[..position].contains(dependency);
                if !emitted_before {
                    return Err(FillerError::OrderViolation {
                        table: table.clone(),
                        dependency: dependency.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Check if a table depends on another table (directly or indirectly)
    pub fn depends_on(&self, table: &str, dependency: &str) -> bool {
        if let Some(node) = self.nodes.get(table) {
            if node.depends_on.iter().any(|d| d == dependency) {
                return true;
            }
            for dep in &node.depends_on {
                if self.depends_on(dep, dependency) {
                    return true;
                }
            }
        }
        false
    }
}

/// Find row lookups that read a table emitted after the row's own table.
///
/// A lookup into the row's own table is allowed (it sees earlier rows).
pub fn check_row_references(catalog: &Catalog, seed: &SeedData) -> Vec<ForwardReference> {
    let mut problems = Vec::new();

    for (table_name, rows) in seed.tables() {
        let Some(position) = catalog.position(table_name) else {
            continue;
        };

        for (row_index, row) in rows.iter().enumerate() {
            for value in row {
                for referenced in value.referenced_tables() {
                    let later = match catalog.position(referenced) {
                        Some(p) => p > position,
                        None => true,
                    };
                    if later {
                        problems.push(ForwardReference {
                            table: table_name.clone(),
                            row: row_index,
                            referenced: referenced.to_string(),
                        });
                    }
                }
            }
        }
    }

    problems
}
