use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SeedError};
use crate::sqlgen::DEFAULT_SQL_FILE;

/// Default fixture directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the database under the platform data directory
pub const DATABASE_FILE: &str = "type-s.sqlite";

/// Resolve the store location: an explicit path (flag or `TYPE_S_DATABASE`)
/// wins, otherwise the platform data directory.
pub fn resolve_database(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    let proj_dirs = ProjectDirs::from("org", "type-s", "type-s-db").ok_or_else(|| {
        SeedError::Binding(
            "could not determine a default database location; pass --database".to_string(),
        )
    })?;

    Ok(proj_dirs.data_dir().join(DATABASE_FILE))
}

/// Where the generated INSERT batch is written
pub fn sql_output(data_dir: &Path, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| data_dir.join(DEFAULT_SQL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_database_wins() {
        let path = resolve_database(Some(PathBuf::from("/tmp/wiki.sqlite"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/wiki.sqlite"));
    }

    #[test]
    fn test_sql_output_defaults_into_data_dir() {
        assert_eq!(sql_output(Path::new("data"), None), PathBuf::from("data/seed.sql"));
        assert_eq!(
            sql_output(Path::new("data"), Some(PathBuf::from("out.sql"))),
            PathBuf::from("out.sql")
        );
    }
}
