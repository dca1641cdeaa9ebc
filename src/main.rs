use anyhow::Context;
use blueprints::app::{bootstrap, commands};
use blueprints::config::Command;
use blueprints::utils::{logger, validation::Validate};
use blueprints::{AppConfig, BlueprintStore, CliConfig, InMemoryStore, SqliteStore, StoreBackend};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = cli.resolve().context("failed to load configuration")?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::info!(
        "Starting blueprints with {:?} store and {:?} filter",
        config.store.backend,
        config.filter.kind
    );

    let exit_code = match config.store.backend {
        StoreBackend::Memory => run(&config, InMemoryStore::new(), cli.command).await?,
        StoreBackend::Sqlite => {
            let store = SqliteStore::open(config.sqlite_path())
                .with_context(|| format!("failed to open {}", config.sqlite_path()))?;
            run(&config, store, cli.command).await?
        }
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run<S: BlueprintStore>(config: &AppConfig, store: S, command: Command) -> anyhow::Result<i32> {
    let service = bootstrap::build_service(config, store);
    bootstrap::seed(&service, &config.seed).await?;

    match commands::execute(&service, command).await {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(if response.is_success() { 0 } else { 1 })
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            Ok(e.exit_code())
        }
    }
}
