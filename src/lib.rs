pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod fixture;
pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlgen;
pub mod store;
pub mod ui;

pub use cli::{Cli, Commands};
pub use error::SeedError;
pub use seed::{seed, seed_all, SeedReport};
pub use store::SqliteStore;
pub use ui::{Phase, ProgressUi, SilentUi, Ui};
