//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cloudflare-dns-audit")]
#[command(version)]
#[command(
    about = "Audits DNS configuration for a set of domains against Cloudflare's CDN convention",
    long_about = None
)]
pub struct Cli {
    /// Domain list file, one domain per line. Only consulted outside
    /// Acquia Cloud and when domains.txt is absent.
    #[arg(value_name = "DOMAINS_FILE")]
    pub domains_file: Option<PathBuf>,
}
