use super::tables::{get_table, ALL_TABLES};
use super::types::TableSchema;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),
    #[error("Table {table} is ordered before its parent {parent}")]
    OutOfOrder { table: String, parent: String },
}

/// Resolves table dependencies for filtering and order checks
pub struct DependencyResolver {
    /// Map of table name -> tables it depends on
    deps: HashMap<&'static str, HashSet<&'static str>>,
}

impl DependencyResolver {
    pub fn new() -> Self {
        let deps = ALL_TABLES
            .iter()
            .map(|table| (table.name, table.dependencies()))
            .collect();

        Self { deps }
    }

    /// Given a set of requested tables, resolve all required dependencies.
    /// Returns tables in load order (parents before children).
    pub fn resolve_includes(
        &self,
        requested: &[&str],
    ) -> Result<Vec<&'static TableSchema>, SchemaError> {
        let mut included: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = requested.iter().copied().collect();

        while let Some(table_name) = queue.pop_front() {
            if included.contains(table_name) {
                continue;
            }

            if get_table(table_name).is_none() {
                return Err(SchemaError::UnknownTable(table_name.to_string()));
            }

            included.insert(table_name);

            if let Some(table_deps) = self.deps.get(table_name) {
                for dep in table_deps {
                    if !included.contains(dep) {
                        queue.push_back(dep);
                    }
                }
            }
        }

        let tables: Vec<_> = ALL_TABLES
            .iter()
            .copied()
            .filter(|t| included.contains(t.name))
            .collect();
        self.check_order(&tables)?;
        Ok(tables)
    }

    /// Return all tables in load order
    pub fn all_tables_ordered(&self) -> Vec<&'static TableSchema> {
        ALL_TABLES.to_vec()
    }

    /// Verify every FK parent present in `tables` appears before its child.
    /// Parents absent from `tables` are assumed to be loaded already.
    pub fn check_order(&self, tables: &[&TableSchema]) -> Result<(), SchemaError> {
        let present: HashSet<&str> = tables.iter().map(|t| t.name).collect();
        let mut seen: HashSet<&str> = HashSet::new();

        for table in tables {
            if let Some(deps) = self.deps.get(table.name) {
                for dep in deps {
                    if *dep != table.name && present.contains(dep) && !seen.contains(dep) {
                        return Err(SchemaError::OutOfOrder {
                            table: table.name.to_string(),
                            parent: dep.to_string(),
                        });
                    }
                }
            }
            seen.insert(table.name);
        }

        Ok(())
    }
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{HHKB_MODELS, MANUFACTURERS, PCBS, PCB_CASE_COMPATIBILITY};

    #[test]
    fn test_all_tables_respect_dependencies() {
        let resolver = DependencyResolver::new();
        resolver
            .check_order(&resolver.all_tables_ordered())
            .unwrap();
    }

    #[test]
    fn test_resolve_models_includes_parents() {
        let resolver = DependencyResolver::new();
        let tables = resolver.resolve_includes(&["hhkb_models"]).unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name).collect();

        assert_eq!(
            names,
            vec!["manufacturers", "pcbs", "controllers", "domes", "sliders", "hhkb_models"]
        );
    }

    #[test]
    fn test_resolve_compatibility_pulls_both_parts() {
        let resolver = DependencyResolver::new();
        let tables = resolver
            .resolve_includes(&["pcb_case_compatibility"])
            .unwrap();
        let names: Vec<_> = tables.iter().map(|t| t.name).collect();

        assert_eq!(
            names,
            vec!["manufacturers", "pcbs", "cases", "pcb_case_compatibility"]
        );
    }

    #[test]
    fn test_out_of_order_detected() {
        let resolver = DependencyResolver::new();
        let err = resolver
            .check_order(&[&PCB_CASE_COMPATIBILITY, &PCBS, &MANUFACTURERS])
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::OutOfOrder {
                table: "pcb_case_compatibility".into(),
                parent: "pcbs".into(),
            }
        );
        resolver.check_order(&[&HHKB_MODELS]).unwrap();
    }

    #[test]
    fn test_unknown_table_error() {
        let resolver = DependencyResolver::new();
        let result = resolver.resolve_includes(&["nonexistent"]);
        assert_eq!(result.unwrap_err(), SchemaError::UnknownTable("nonexistent".into()));
    }
}
