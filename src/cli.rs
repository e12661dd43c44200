use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(name = "type-s-db")]
#[command(version, about = "Schema and seed tooling for the Type-S keyboard parts wiki")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create missing tables and upsert every fixture into the database
    Seed {
        /// SQLite database path (default: platform data directory)
        #[arg(long, env = "TYPE_S_DATABASE")]
        database: Option<PathBuf>,

        /// Directory containing one fixture subdirectory per table
        #[arg(long, env = "TYPE_S_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Only seed these tables and their parents (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        tables: Option<Vec<String>>,
    },

    /// Render fixtures as a batch of INSERT statements
    GenerateSql {
        /// Directory containing one fixture subdirectory per table
        #[arg(long, env = "TYPE_S_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Output file (default: <data-dir>/seed.sql)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only render these tables and their parents (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        tables: Option<Vec<String>>,
    },

    /// Print the CREATE TABLE statements for every table
    Schema,

    /// List all table names in load order
    ListTables,

    /// Print every row of a table as JSON
    Dump {
        /// Table name
        table: String,

        /// SQLite database path (default: platform data directory)
        #[arg(long, env = "TYPE_S_DATABASE")]
        database: Option<PathBuf>,
    },

    /// List seeded HHKB models
    Models {
        /// SQLite database path (default: platform data directory)
        #[arg(long, env = "TYPE_S_DATABASE")]
        database: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults() {
        let cli = Cli::try_parse_from(["type-s-db", "seed"]).unwrap();
        match cli.command {
            Commands::Seed { data_dir, tables, .. } => {
                assert_eq!(data_dir, PathBuf::from("data"));
                assert!(tables.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_table_list_is_comma_separated() {
        let cli = Cli::try_parse_from(["type-s-db", "generate-sql", "-t", "pcbs,cases", "-o", "x.sql"])
            .unwrap();
        match cli.command {
            Commands::GenerateSql { tables, output, .. } => {
                assert_eq!(tables, Some(vec!["pcbs".to_string(), "cases".to_string()]));
                assert_eq!(output, Some(PathBuf::from("x.sql")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
