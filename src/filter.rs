use crate::schema::{DependencyResolver, TableSchema};
use anyhow::Result;

/// Resolves which tables to process based on the include filter
pub fn resolve_tables(include: Option<Vec<String>>) -> Result<Vec<&'static TableSchema>> {
    let resolver = DependencyResolver::new();

    match include {
        Some(include_list) => {
            let refs: Vec<&str> = include_list.iter().map(|s| s.as_str()).collect();
            tracing::info!("Resolving dependencies for: {:?}", refs);
            let tables = resolver.resolve_includes(&refs)?;

            tracing::info!(
                "Including {} tables: {}",
                tables.len(),
                tables.iter().map(|t| t.name).collect::<Vec<_>>().join(", ")
            );

            Ok(tables)
        }
        None => {
            let tables = resolver.all_tables_ordered();
            tracing::debug!("Including all {} tables", tables.len());
            Ok(tables)
        }
    }
}
