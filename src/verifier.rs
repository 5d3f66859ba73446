//! Per-domain DNS verification
//!
//! Runs the classification-appropriate query sequence against a resolver
//! and produces one of six verdicts. Bare domains are expected to publish
//! the A records of their Cloudflare alias; subdomains are expected to
//! CNAME straight to it.

use crate::classifier::is_bare_domain;
use crate::resolver::RecordResolver;
use std::net::Ipv4Addr;

/// Suffix appended to a domain to form its Cloudflare CDN alias
pub const CLOUDFLARE_CDN_SUFFIX: &str = ".cdn.cloudflare.net";

/// The six mutually exclusive outcome categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictKind {
    /// Bare domain publishes every Cloudflare IP
    BareCorrect,
    /// Bare domain resolves, but not to the Cloudflare IPs
    BareMismatch,
    /// Cloudflare has no A records on the domain's CDN alias
    BareNoCloudflare,
    /// Subdomain CNAMEs exactly to its CDN alias
    CnameCorrect,
    /// Subdomain has a CNAME, but to the wrong target
    CnameMismatch,
    /// Subdomain has no CNAME at all
    CnameMissing,
}

impl VerdictKind {
    /// True for the two correct-configuration categories
    pub fn is_correct(self) -> bool {
        matches!(self, VerdictKind::BareCorrect | VerdictKind::CnameCorrect)
    }
}

/// Outcome of checking one domain
#[derive(Debug, Clone)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub explanation: String,
}

/// The Cloudflare CDN alias for `domain`
pub fn cdn_hostname(domain: &str) -> String {
    format!("{domain}{CLOUDFLARE_CDN_SUFFIX}")
}

/// Verify a single domain, branching on its classification
pub async fn verify(domain: &str, resolver: &dyn RecordResolver) -> Verdict {
    if is_bare_domain(domain) {
        verify_bare(domain, resolver).await
    } else {
        verify_subdomain(domain, resolver).await
    }
}

async fn verify_bare(domain: &str, resolver: &dyn RecordResolver) -> Verdict {
    let own_ips = resolver.lookup_a(domain).await;
    let alias = cdn_hostname(domain);
    let cdn_ips = resolver.lookup_a(&alias).await;

    if cdn_ips.is_empty() {
        return Verdict {
            kind: VerdictKind::BareNoCloudflare,
            explanation: format!("Looks like Cloudflare has no IP addresses on {alias}"),
        };
    }

    // Every Cloudflare IP must already be one of the domain's own IPs
    let missing: Vec<&Ipv4Addr> = cdn_ips.iter().filter(|ip| !own_ips.contains(ip)).collect();

    if missing.is_empty() {
        Verdict {
            kind: VerdictKind::BareCorrect,
            explanation: "Points correctly to Cloudflare IPs".to_string(),
        }
    } else {
        Verdict {
            kind: VerdictKind::BareMismatch,
            explanation: format!(
                "Should have A records to {}\n  It's currently pointing to {}",
                join_ips(&cdn_ips),
                join_ips(&own_ips)
            ),
        }
    }
}

async fn verify_subdomain(domain: &str, resolver: &dyn RecordResolver) -> Verdict {
    let targets = resolver.lookup_cname(domain).await;
    let expected = cdn_hostname(domain);

    // Only the first CNAME record is consulted; extra records are ignored
    match targets.first() {
        None => Verdict {
            kind: VerdictKind::CnameMissing,
            explanation: "doesn't have CNAME yet".to_string(),
        },
        Some(target) if *target == expected => Verdict {
            kind: VerdictKind::CnameCorrect,
            explanation: format!("Points correctly to {expected}"),
        },
        Some(_) => Verdict {
            kind: VerdictKind::CnameMismatch,
            explanation: format!("should have a CNAME to {expected}"),
        },
    }
}

fn join_ips(ips: &[Ipv4Addr]) -> String {
    ips.iter()
        .map(|ip| ip.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
