use anyhow::{bail, Context, Result};
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use type_s_db::{
    cli::{Cli, Commands},
    config,
    filter::resolve_tables,
    models::HhkbModel,
    schema::{get_table, table_names, ALL_TABLES, HHKB_MODELS},
    seed::seed,
    sqlgen::write_seed_sql,
    store::{generate_schema_sql, select_all, select_as, SqliteStore},
    ProgressUi,
};

fn init_logging(ui: &ProgressUi) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("type_s_db=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ui.log_writer())
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let mut ui = ProgressUi::new();
    init_logging(&ui);
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Seed {
            database,
            data_dir,
            tables,
        } => {
            let start = Instant::now();

            let tables = resolve_tables(tables)?;
            let db_path = config::resolve_database(database)?;

            let mut store = SqliteStore::open(&db_path)
                .with_context(|| format!("Failed to open database {:?}", db_path))?;
            tracing::info!("Seeding {:?} from {:?}", db_path, data_dir);

            let report = seed(&mut store, &data_dir, &tables, &mut ui).context("Seed failed")?;

            println!(
                "\nSeeded {:?} ({} rows across {} tables) in {:.1}s",
                db_path,
                report.total_rows(),
                report.tables.len(),
                start.elapsed().as_secs_f64()
            );
        }

        Commands::GenerateSql {
            data_dir,
            output,
            tables,
        } => {
            let tables = resolve_tables(tables)?;
            let output = config::sql_output(&data_dir, output);

            let statements = write_seed_sql(&data_dir, &tables, &output)
                .context("Failed to generate seed SQL")?;
            println!("Generated {:?} with {} INSERT statements", output, statements);
        }

        Commands::Schema => {
            print!("{}", generate_schema_sql(ALL_TABLES));
        }

        Commands::ListTables => {
            println!("Tables in load order:\n");
            for name in table_names() {
                println!("  {}", name);
            }
        }

        Commands::Dump { table, database } => {
            let Some(schema) = get_table(&table) else {
                bail!("Unknown table: {}", table);
            };
            let db_path = config::resolve_database(database)?;
            let store = SqliteStore::open(&db_path)
                .with_context(|| format!("Failed to open database {:?}", db_path))?;

            let rows = select_all(store.connection(), schema)?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }

        Commands::Models { database } => {
            let db_path = config::resolve_database(database)?;
            let store = SqliteStore::open(&db_path)
                .with_context(|| format!("Failed to open database {:?}", db_path))?;

            let models: Vec<HhkbModel> = select_as(store.connection(), &HHKB_MODELS)?;
            for model in models {
                let released = model
                    .release_date()
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:<12} {:<40} {:<16} {}",
                    model.model_number, model.model_name, model.generation, released
                );
            }
        }
    }

    Ok(())
}
