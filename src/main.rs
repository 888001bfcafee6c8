//! HR Gateway
//!
//! Proxies employee requests to the Manager API and removes financially
//! sensitive fields from the replies.
//!
//! # Architecture Overview
//!
//! ```text
//!     HR client                 ┌──────────────────────────────────────────────┐
//!     ──────────────────────────┼─▶ http::server ─▶ handlers ─▶ gateway        │
//!                               │                                  │           │
//!                               │                                  ▼           │
//!                               │                          upstream::client ───┼──▶ Manager API
//!                               │                                  │           │
//!     ◀─────────────────────────┼── JSON ◀── sanitizer ◀───────────┘           │
//!                               │                                              │
//!                               │  config · observability · lifecycle          │
//!                               └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use hr_gateway::config::load_config;
use hr_gateway::lifecycle::startup;
use hr_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "hr-gateway")]
#[command(about = "HR gateway in front of the Manager payroll API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long, env = "HR_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("hr-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
