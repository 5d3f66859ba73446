//! Domain list filtering
//!
//! Narrows the raw domain list down to the check list using substring
//! include/exclude patterns.

/// Filter `domains` by substring patterns.
///
/// - With an empty `include` list every domain is a candidate; otherwise
///   a domain must contain at least one include pattern.
/// - A domain containing any `exclude` pattern is dropped, regardless of
///   inclusion status.
/// - Input order is preserved and duplicates are kept.
pub fn filter_domains(domains: &[String], include: &[String], exclude: &[String]) -> Vec<String> {
    domains
        .iter()
        .filter(|domain| {
            let included =
                include.is_empty() || include.iter().any(|pattern| domain.contains(pattern.as_str()));
            let excluded = exclude.iter().any(|pattern| domain.contains(pattern.as_str()));
            included && !excluded
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains(list: &[&str]) -> Vec<String> {
        list.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn no_patterns_keeps_everything() {
        let input = domains(&["a.example.com", "b.example.com"]);
        assert_eq!(filter_domains(&input, &[], &[]), input);
    }

    #[test]
    fn include_requires_a_matching_pattern() {
        let input = domains(&["shop.example.com", "blog.example.org", "shop.example.net"]);
        let include = domains(&["shop"]);
        assert_eq!(
            filter_domains(&input, &include, &[]),
            domains(&["shop.example.com", "shop.example.net"])
        );
    }

    #[test]
    fn exclude_wins_over_include() {
        let input = domains(&["shop.staging.example.com"]);
        let include = domains(&["shop"]);
        let exclude = domains(&["staging"]);
        assert!(filter_domains(&input, &include, &exclude).is_empty());
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let input = domains(&["b.example.com", "a.example.com", "b.example.com"]);
        assert_eq!(filter_domains(&input, &[], &[]), input);
    }
}
