use clap::Parser;
use slashings_explorer::cli::{Cli, Commands};
use slashings_explorer::config::ExplorerConfig;
use slashings_explorer::error::Result;
use slashings_explorer::grid::{slashings_grid, GridRequest};
use slashings_explorer::rpc::RpcServer;
use slashings_explorer::storage::Storage;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config messages go through a plain subscriber until the configured one exists.
    let mut config = tracing::subscriber::with_default(tracing_subscriber::fmt().finish(), || {
        ExplorerConfig::load_or_default(&cli.config)
    });
    if let Some(db_path) = cli.db_path {
        config.node.db_path = db_path;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.node.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve { rpc_port } => {
            if let Some(port) = rpc_port {
                config.node.rpc_port = port;
            }
            info!("Opening slashing store at {}", config.node.db_path);
            let storage = Storage::open_read_only(&config.node.db_path)?;
            RpcServer::new(Arc::new(storage), Arc::new(config)).start().await
        }
        Commands::Page { start, length, draw } => {
            let storage = Storage::open_read_only(&config.node.db_path)?;
            let request = GridRequest { draw, start, length };
            let grid = slashings_grid(&storage, &request, &config.chain)?;
            println!("{}", serde_json::to_string_pretty(&grid)?);
            Ok(())
        }
    }
}
