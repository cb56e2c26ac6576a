use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use index_seeder::cli::{parse_exit_code, Cli, Commands};
use index_seeder::{commands, logging, Dependencies};
use index_seeder_pipeline::SeedOptions;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    logging::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };

    if let Err(e) = run(cli).await {
        error!("Command failed: {:#}", e);
        eprintln!("\nError: {}", e);

        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let deps = Dependencies::new(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Commands::SetupIndices => {
            commands::setup_indices(&deps)
                .await
                .context("Failed to set up indices")?;
            info!("Indices setup completed successfully");
        }
        Commands::Seed(args) => {
            commands::seed_data(&deps, &SeedOptions::from(args))
                .await
                .context("Failed to seed data")?;
            info!("Data seeding completed successfully");
        }
    }

    Ok(())
}
