//! Cloudflare DNS Audit
//!
//! Checks that a set of domains routes through Cloudflare's CDN and
//! reports the findings by email:
//! - Bare (apex) domains must publish the A records of their
//!   `<domain>.cdn.cloudflare.net` alias
//! - Subdomains must have a CNAME pointing at `<domain>.cdn.cloudflare.net`
//!
//! Domains come either from a newline-delimited file or, when running
//! inside Acquia Cloud, from the Cloud API v2 environment listing.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cloudflare_dns_audit::resolver::HickoryRecordResolver;
//! use cloudflare_dns_audit::verifier::verify;
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = HickoryRecordResolver::new();
//!     let verdict = verify("www.example.com", &resolver).await;
//!     // Fold verdicts into an AuditReport...
//! }
//! ```

pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod notify;
pub mod report;
pub mod resolver;
pub mod runner;
pub mod source;
pub mod verifier;

// Re-export commonly used types
pub use classifier::is_bare_domain;
pub use cli::Cli;
pub use config::{AuditConfig, Credentials, SmtpSettings};
pub use error::{AuditError, ConfigError, NotifyError, Result, SourceError};
pub use filter::filter_domains;
pub use report::AuditReport;
pub use resolver::{HickoryRecordResolver, RecordResolver};
pub use verifier::{verify, Verdict, VerdictKind, CLOUDFLARE_CDN_SUFFIX};
