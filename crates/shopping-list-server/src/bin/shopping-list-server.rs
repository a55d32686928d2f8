//! Shopping List Server Binary
//!
//! Serves the shopping list over HTTP.
//!
//! # Usage
//! ```bash
//! shopping-list-server [--port 3000] [--host 127.0.0.1] [--store ./shopping-list.json] [--verbose]
//! ```
//!
//! Every flag can also come from the environment (or a `.env` file).

use clap::Parser;
use shopping_list_server::{Server, ServerConfig, ITEMS_PATH};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shopping List Server - CRUD over a JSON-file backed list
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on (default: 3000)
    #[arg(short, long, env = "SHOPPING_LIST_PORT")]
    port: Option<u16>,

    /// Host to bind to (default: 127.0.0.1)
    #[arg(long, env = "SHOPPING_LIST_HOST")]
    host: Option<String>,

    /// JSON file holding the list (default: ./shopping-list.json)
    #[arg(short, long, env = "SHOPPING_LIST_STORE")]
    store: Option<PathBuf>,

    /// JSON configuration file; flags and env vars override its values
    #[arg(short, long, env = "SHOPPING_LIST_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(args.verbose)
        .init();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(store) = args.store {
        config = config.with_store_path(store);
    }

    print_banner(&config);

    let server = Server::new(config);
    server.start().await?;

    Ok(())
}

fn print_banner(config: &ServerConfig) {
    println!();
    println!("Shopping List Server v{}", shopping_list_server::VERSION);
    println!("   └─ http://{}:{}{}", config.host, config.port, ITEMS_PATH);
    println!();
    println!("Endpoints");
    println!("   ├─ GET           {}           — List items", ITEMS_PATH);
    println!("   ├─ POST          {}           — Add an item", ITEMS_PATH);
    println!("   ├─ PUT | PATCH   {}           — Update a quantity", ITEMS_PATH);
    println!("   └─ DELETE        {}?name=<n>  — Remove items by name", ITEMS_PATH);
    println!();
    println!("Store: {}", config.store_path.display());
    println!("Press Ctrl+C to stop the server");
    println!();
}
