//! Audit run orchestration
//!
//! Drives one run end to end: load configuration, obtain the domain list,
//! filter it, verify each domain sequentially, then deliver the report.
//! Everything fatal is detected before the verification loop starts.

use crate::cli::Cli;
use crate::config::{AuditConfig, Credentials, CONFIG_PATH, CREDS_PATH};
use crate::error::{Result, SourceError};
use crate::filter::filter_domains;
use crate::notify::Notifier;
use crate::report::AuditReport;
use crate::resolver::HickoryRecordResolver;
use crate::source::{domains_for_environment, read_domain_file, AcquiaClient, CloudMarkers};
use crate::verifier::verify;
use console::style;
use std::path::{Path, PathBuf};

const DEFAULT_DOMAIN_FILE: &str = "domains.txt";
const SUBJECT: &str = "Cloudflare DNS configuration";

/// Run a full audit
pub async fn run(cli: Cli) -> Result<()> {
    let config = AuditConfig::load(CONFIG_PATH)?;

    let (domains, subject) = match CloudMarkers::from_env() {
        Some(markers) => {
            let domains = cloud_domains(&markers, &config).await?;
            let subject = format!("[{}] - {SUBJECT}", markers.docroot());
            (domains, subject)
        }
        None => {
            println!(
                "{}",
                style("NOT in an Acquia environment, assuming TXT file").dim()
            );
            let path = domain_file_path(cli.domains_file.as_deref())?;
            (read_domain_file(&path)?, SUBJECT.to_string())
        }
    };

    let to_check = filter_domains(&domains, &config.patterns_to_check, &config.patterns_to_ignore);
    tracing::info!(
        "checking {} of {} domains after filtering",
        to_check.len(),
        domains.len()
    );

    let resolver = HickoryRecordResolver::new();
    let mut report = AuditReport::new();
    for domain in to_check {
        let verdict = verify(&domain, &resolver).await;
        tracing::debug!("{domain}: {:?}", verdict.kind);
        report.record(domain, verdict);
    }

    let notifier = Notifier::new(config.smtp.clone(), config.debug_only);
    notifier
        .deliver(&config.emails, &subject, &report.render())
        .await;

    Ok(())
}

/// Resolve the domain list file: `domains.txt` if present, else the CLI
/// argument
fn domain_file_path(cli_path: Option<&Path>) -> std::result::Result<PathBuf, SourceError> {
    let default = Path::new(DEFAULT_DOMAIN_FILE);
    if default.exists() {
        return Ok(default.to_path_buf());
    }
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }
    Err(SourceError::DomainFileNotFound {
        path: DEFAULT_DOMAIN_FILE.to_string(),
    })
}

/// Fetch the domain list of the current environment from the Acquia
/// Cloud API
async fn cloud_domains(markers: &CloudMarkers, config: &AuditConfig) -> Result<Vec<String>> {
    println!("Getting Configuration...");
    let creds = Credentials::load(CREDS_PATH)?;

    let application_id = markers
        .application_uuid
        .clone()
        .or_else(|| config.application_id.clone())
        .ok_or(SourceError::MissingApplicationId)?;

    println!("Parsing Environments");
    println!("Retrieving domains for {}", markers.docroot());

    let client = AcquiaClient::connect(&creds.acquia.key_id, &creds.acquia.secret).await?;
    let environments = client.environments(&application_id).await?;

    let domains = domains_for_environment(environments, &markers.environment, &application_id)?;
    Ok(domains)
}
