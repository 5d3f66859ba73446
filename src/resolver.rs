//! DNS record lookups
//!
//! Wraps the hickory resolver behind a small trait so the verifier can be
//! driven by an in-memory resolver in tests. Lookup failures (NXDOMAIN,
//! timeouts) surface as empty record sets; the verifier treats those the
//! same as a domain with no records.

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;
use std::net::Ipv4Addr;

/// Per-record-type lookups the verifier needs
#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// A records for `domain`; empty on failure or no records
    async fn lookup_a(&self, domain: &str) -> Vec<Ipv4Addr>;

    /// CNAME targets for `domain`, trailing dots stripped; empty on
    /// failure or no records
    async fn lookup_cname(&self, domain: &str) -> Vec<String>;
}

/// System-configured resolver backed by hickory
pub struct HickoryRecordResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryRecordResolver {
    /// Create a resolver with the system default configuration
    pub fn new() -> Self {
        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default());
        Self { resolver }
    }
}

impl Default for HickoryRecordResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    async fn lookup_a(&self, domain: &str) -> Vec<Ipv4Addr> {
        match self.resolver.ipv4_lookup(domain).await {
            Ok(lookup) => lookup.iter().map(|a| a.0).collect(),
            Err(e) => {
                tracing::debug!("A lookup for {domain} returned no records: {e}");
                Vec::new()
            }
        }
    }

    async fn lookup_cname(&self, domain: &str) -> Vec<String> {
        match self.resolver.lookup(domain, RecordType::CNAME).await {
            Ok(lookup) => lookup
                .iter()
                .filter_map(|rdata| match rdata {
                    RData::CNAME(cname) => {
                        Some(cname.0.to_string().trim_end_matches('.').to_string())
                    }
                    _ => None,
                })
                .collect(),
            Err(e) => {
                tracing::debug!("CNAME lookup for {domain} returned no records: {e}");
                Vec::new()
            }
        }
    }
}
