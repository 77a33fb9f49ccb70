use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "slashings_explorer")]
#[command(about = "Read-only validator slashings explorer", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "explorer.toml")]
    pub config: String,
    /// Overrides node.db_path from the config
    #[arg(long, global = true)]
    pub db_path: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the slashings page and its JSON data endpoint
    Serve {
        #[arg(long)]
        rpc_port: Option<u16>,
    },
    /// Print one page of the slashings grid as JSON
    Page {
        #[arg(long, default_value = "0")]
        start: u64,
        #[arg(long, default_value = "10")]
        length: u64,
        #[arg(long, default_value = "1")]
        draw: u64,
    },
}
