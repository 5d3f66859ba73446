//! Bare-domain classification
//!
//! Decides whether a domain is an apex ("bare") domain or a subdomain.
//! The distinction drives the verification strategy: bare domains are
//! checked via A records, subdomains via a CNAME.

use regex::Regex;
use std::sync::LazyLock;

/// Suffix patterns that keep a compound public suffix together as a
/// single unit, so `example.co.uk` still counts as bare.
///
/// This table is heuristic. It covers `.com.<cc>`, `.co.<cc>` and
/// `.in.<cc>` style suffixes; ccTLDs with deeper structures are
/// misclassified. Kept as data so corrections don't touch the logic.
const COMPOUND_SUFFIX_PATTERNS: &[&str] = &[
    r"\.com(\..+)?", // .com and .com.<cc>
    r"\.co\.[^.]*",  // .co.uk style
    r"\.in\.[^.]*",  // .in.<cc>
];

/// Any single trailing label, e.g. `.org` or `.io`.
const GENERIC_SUFFIX_PATTERN: &str = r"\.[^.]*";

static BARE_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = COMPOUND_SUFFIX_PATTERNS
        .iter()
        .copied()
        .chain(std::iter::once(GENERIC_SUFFIX_PATTERN))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("^[^.]*({suffixes})$")).expect("bare-domain pattern is valid")
});

/// Returns true if `domain` is an apex domain with no leading subdomain
/// label. Pure and deterministic; no normalization is applied.
pub fn is_bare_domain(domain: &str) -> bool {
    BARE_DOMAIN.is_match(domain)
}
