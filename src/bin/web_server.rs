//! Web server for the variation-selector steganography API
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin web_server -- --config config/server.toml
//! ```
//!
//! Without `--config` the server runs on built-in defaults
//! (`127.0.0.1:8080`, frontend from `./static`). A `PORT` environment
//! variable overrides the configured port either way.

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::path::Path;

use emoji_cloak::server::{routes, ServerConfig};
use emoji_cloak::utils::logging::init_logger;

/// Command-line arguments for the web server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the server configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path))?,
        None => ServerConfig::default(),
    };

    config.apply_port_override(std::env::var("PORT").ok().as_deref())?;

    info!("🚀 Initializing web server...");

    let static_dir = &config.frontend.static_dir;
    if !Path::new(static_dir).is_dir() {
        warn!(
            "⚠️ Static directory {:?} not found; the frontend will serve 404s",
            static_dir
        );
    }

    let app = routes::router(static_dir);

    let addr = config.bind_address();
    info!("🌐 Web server running on http://{}", addr);
    info!(
        "📡 API endpoints: http://{}/api/encode, http://{}/api/decode",
        addr, addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
