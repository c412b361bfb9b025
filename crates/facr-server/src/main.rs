//! HTTP entry point for invoice extraction.
//!
//! Receives uploaded invoice files, runs the extraction pipeline against a
//! temporary copy and returns the mapped field JSON.

mod http;
mod state;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use facr_core::models::config::FacrConfig;
use state::AppState;

/// facr-server - invoice extraction over HTTP
#[derive(Parser)]
#[command(name = "facr-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    bind: String,

    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = if let Some(path) = &cli.config {
        FacrConfig::from_file(std::path::Path::new(path))?
    } else {
        FacrConfig::default()
    };

    let state = AppState::new(config);
    let app = http::create_router(state);

    let listener = tokio::net::TcpListener::bind(&cli.bind).await?;
    tracing::info!("listening on {}", cli.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
