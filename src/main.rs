use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use confix_board::config::ServerConfig;
use confix_board::error::BoardError;
use confix_board::orders::OrderCatalog;
use confix_board::shutdown::install_shutdown_handler;
use confix_board::web::{run_server, AppState};

#[derive(Parser, Debug)]
#[command(name = "confix-board")]
#[command(version)]
#[command(about = "Maintenance job-order board with an HTML dashboard and JSON API")]
struct Args {
    /// Host to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let listen_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(BoardError::InvalidAddr)?;
    let config = ServerConfig::new(listen_addr).with_debug(args.debug);

    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let catalog = OrderCatalog::seeded();

    tracing::info!(
        addr = %config.listen_addr,
        orders = catalog.len(),
        "Starting confix-board"
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };

    let shutdown = install_shutdown_handler();
    run_server(config.listen_addr, state, shutdown).await?;

    tracing::info!("Server stopped");
    Ok(())
}
