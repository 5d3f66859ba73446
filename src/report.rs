//! Report aggregation and rendering
//!
//! Folds per-domain verdicts into six ordered buckets and renders the
//! plain-text email body. Sections for empty buckets are omitted; the two
//! banner lines always appear.

use crate::verifier::{Verdict, VerdictKind};

/// Aggregated audit results, one bucket per verdict category.
///
/// Each bucket holds `(domain, explanation)` pairs in the order the
/// verdicts were recorded, which is filtered-domain-list order.
#[derive(Debug, Default)]
pub struct AuditReport {
    bare_correct: Vec<(String, String)>,
    bare_mismatch: Vec<(String, String)>,
    bare_no_cloudflare: Vec<(String, String)>,
    cname_correct: Vec<(String, String)>,
    cname_mismatch: Vec<(String, String)>,
    cname_missing: Vec<(String, String)>,
}

impl AuditReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a domain's verdict into its bucket
    pub fn record(&mut self, domain: String, verdict: Verdict) {
        let bucket = match verdict.kind {
            VerdictKind::BareCorrect => &mut self.bare_correct,
            VerdictKind::BareMismatch => &mut self.bare_mismatch,
            VerdictKind::BareNoCloudflare => &mut self.bare_no_cloudflare,
            VerdictKind::CnameCorrect => &mut self.cname_correct,
            VerdictKind::CnameMismatch => &mut self.cname_mismatch,
            VerdictKind::CnameMissing => &mut self.cname_missing,
        };
        bucket.push((domain, verdict.explanation));
    }

    /// Entries filed under `kind`, in recording order
    pub fn bucket(&self, kind: VerdictKind) -> &[(String, String)] {
        match kind {
            VerdictKind::BareCorrect => &self.bare_correct,
            VerdictKind::BareMismatch => &self.bare_mismatch,
            VerdictKind::BareNoCloudflare => &self.bare_no_cloudflare,
            VerdictKind::CnameCorrect => &self.cname_correct,
            VerdictKind::CnameMismatch => &self.cname_mismatch,
            VerdictKind::CnameMissing => &self.cname_missing,
        }
    }

    /// Total number of recorded domains across all buckets
    pub fn total(&self) -> usize {
        self.bare_correct.len()
            + self.bare_mismatch.len()
            + self.bare_no_cloudflare.len()
            + self.cname_correct.len()
            + self.cname_mismatch.len()
            + self.cname_missing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Render the plain-text report body
    pub fn render(&self) -> String {
        let mut body =
            String::from("Hi everyone,\n\nPlease find current Cloudflare DNS configuration\n");

        body.push_str("\n************ INCORRECT CONFIGURATION ************\n");
        section(
            &mut body,
            "### All ZONES (baredomain) that DOESN'T have a correct configuration:",
            &self.bare_mismatch,
        );
        section(
            &mut body,
            "### All ZONES (baredomain) that DOESN'T have a Cloudflare conf yet:",
            &self.bare_no_cloudflare,
        );
        section(
            &mut body,
            "### All ZONES (non-baredomain) that DOESN'T have a correct configuration:",
            &self.cname_mismatch,
        );
        section(
            &mut body,
            "### All ZONES (non-baredomain) that DOESN'T have a CNAME yet:",
            &self.cname_missing,
        );

        body.push_str("\n************ CORRECT CONFIGURATION ************\n");
        section(
            &mut body,
            "### All ZONES (baredomain) that DOES have a correct configuration:",
            &self.bare_correct,
        );
        section(
            &mut body,
            "### All ZONES (non-baredomain) that DOES have a correct configuration:",
            &self.cname_correct,
        );

        body
    }
}

fn section(body: &mut String, heading: &str, entries: &[(String, String)]) {
    if entries.is_empty() {
        return;
    }
    body.push('\n');
    body.push_str(heading);
    body.push('\n');
    for (domain, explanation) in entries {
        body.push_str("* ");
        body.push_str(domain);
        body.push(' ');
        body.push_str(explanation);
        body.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(kind: VerdictKind, explanation: &str) -> Verdict {
        Verdict {
            kind,
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn empty_report_has_banners_only() {
        let report = AuditReport::new();
        let body = report.render();
        assert!(body.starts_with("Hi everyone,"));
        assert!(body.contains("************ INCORRECT CONFIGURATION ************"));
        assert!(body.contains("************ CORRECT CONFIGURATION ************"));
        assert!(!body.contains("### All ZONES"));
    }

    #[test]
    fn empty_buckets_contribute_no_heading() {
        let mut report = AuditReport::new();
        report.record(
            "www.example.com".to_string(),
            verdict(VerdictKind::CnameMissing, "doesn't have CNAME yet"),
        );
        let body = report.render();
        assert!(body.contains("### All ZONES (non-baredomain) that DOESN'T have a CNAME yet:\n* www.example.com doesn't have CNAME yet\n"));
        assert!(!body.contains("(baredomain) that DOESN'T have a correct configuration"));
        assert!(!body.contains("DOES have a correct configuration"));
    }

    #[test]
    fn incorrect_sections_come_before_correct_sections() {
        let mut report = AuditReport::new();
        report.record(
            "example.com".to_string(),
            verdict(VerdictKind::BareCorrect, "Points correctly to Cloudflare IPs"),
        );
        report.record(
            "www.example.com".to_string(),
            verdict(
                VerdictKind::CnameMismatch,
                "should have a CNAME to www.example.com.cdn.cloudflare.net",
            ),
        );
        let body = report.render();
        let incorrect = body
            .find("(non-baredomain) that DOESN'T have a correct configuration")
            .unwrap();
        let correct = body
            .find("(baredomain) that DOES have a correct configuration")
            .unwrap();
        assert!(incorrect < correct);
    }

    #[test]
    fn bucket_order_follows_recording_order() {
        let mut report = AuditReport::new();
        report.record(
            "b.example.com".to_string(),
            verdict(VerdictKind::CnameMissing, "doesn't have CNAME yet"),
        );
        report.record(
            "a.example.com".to_string(),
            verdict(VerdictKind::CnameMissing, "doesn't have CNAME yet"),
        );
        let body = report.render();
        let first = body.find("* b.example.com").unwrap();
        let second = body.find("* a.example.com").unwrap();
        assert!(first < second);
    }
}
