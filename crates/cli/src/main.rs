use anyhow::Result;
use clap::{Parser, Subcommand};
use invoicedash_core::{DeploymentMode, SeedCatalog};
use invoicedash_http::{create_router, AppState};
use invoicedash_storage::PgStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "invoicedash")]
#[command(about = "Admin seeding and deduplication for the invoicedash database", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP admin server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Seed the demonstration catalog directly
    Seed,
    /// Remove duplicate invoices and install the uniqueness constraint
    Cleanup,
}

fn get_database_url() -> Result<String> {
    std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable must be set"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let mode = DeploymentMode::from_env();
    let store = PgStore::connect(&get_database_url()?).await?;

    match cli.command {
        Commands::Serve { port, host } => {
            let state = Arc::new(AppState { store, mode, catalog: SeedCatalog::canonical() });
            let router = create_router(state);
            let addr = format!("{host}:{port}");
            tracing::info!("Starting HTTP server on {}", addr);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            axum::serve(listener, router).await?;
        },
        Commands::Seed => {
            if mode.is_production() {
                anyhow::bail!("seeding is forbidden in production");
            }
            let report = store.seed(&SeedCatalog::canonical()).await?;
            println!(
                "Seed complete: {} customers inserted, {} invoices inserted, {} skipped",
                report.customers_inserted, report.invoices_inserted, report.invoices_skipped
            );
        },
        Commands::Cleanup => {
            if mode.is_production() {
                anyhow::bail!("cleanup is forbidden in production");
            }
            let report = store.cleanup_duplicates().await?;
            if report.is_clean() {
                println!("No duplicate invoices found.");
            } else {
                println!(
                    "Removed {} duplicate rows across {} groups:",
                    report.rows_deleted,
                    report.groups.len()
                );
                for group in &report.groups {
                    let day = group.date.map_or_else(|| "none".to_owned(), |d| d.to_string());
                    println!(
                        "  customer {} amount {} date {}: {} rows",
                        group.customer_id, group.amount, day, group.count
                    );
                }
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::parse_from(["invoicedash", "serve"]);
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 3000);
                assert_eq!(host, "127.0.0.1");
            },
            _ => panic!("expected serve"),
        }
    }
}
