//! Cloudflare DNS Audit binary
//!
//! Loads configuration, obtains the domain list (file or Acquia Cloud),
//! verifies every domain against Cloudflare's CDN convention and delivers
//! the report by email. Exits 1 on any fatal startup error.

use clap::Parser;
use cloudflare_dns_audit::cli::Cli;
use cloudflare_dns_audit::runner;
use console::style;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = runner::run(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
