use cloudflare_dns_audit::config::{AuditConfig, Credentials};
use cloudflare_dns_audit::error::ConfigError;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_a_full_config() {
    let file = write_config(
        r#"
debug_only = false
emails = ["ops@example.com", "dns@example.com"]
patterns_to_ignore = ["staging", "elb.amazonaws.com"]
patterns_to_check = ["example"]
application_id = "a47ac10b-58cc-4372-a567-0e02b2c3d479"

[smtp]
host = "mail.example.com"
port = 587
from = "audit@example.com"
"#,
    );

    let config = AuditConfig::load(file.path()).unwrap();
    assert!(!config.debug_only);
    assert_eq!(config.emails.len(), 2);
    assert_eq!(config.patterns_to_ignore, vec!["staging", "elb.amazonaws.com"]);
    assert_eq!(config.patterns_to_check, vec!["example"]);
    assert_eq!(
        config.application_id.as_deref(),
        Some("a47ac10b-58cc-4372-a567-0e02b2c3d479")
    );
    assert_eq!(config.smtp.host, "mail.example.com");
    assert_eq!(config.smtp.port, 587);
}

#[test]
fn optional_keys_default() {
    let file = write_config(r#"emails = ["ops@example.com"]"#);

    let config = AuditConfig::load(file.path()).unwrap();
    assert!(!config.debug_only);
    assert!(config.patterns_to_ignore.is_empty());
    assert!(config.patterns_to_check.is_empty());
    assert!(config.application_id.is_none());
    assert_eq!(config.smtp.host, "localhost");
    assert_eq!(config.smtp.port, 25);
}

#[test]
fn missing_file_is_file_not_found() {
    let result = AuditConfig::load("no-such-config.toml");
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("emails = [not toml");
    let result = AuditConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn missing_emails_key_is_a_parse_error() {
    let file = write_config("debug_only = true");
    let result = AuditConfig::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn empty_recipients_without_debug_is_rejected() {
    let file = write_config("emails = []");
    let result = AuditConfig::load(file.path());
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequired { ref key }) if key == "emails"
    ));
}

#[test]
fn empty_recipients_are_fine_in_debug_mode() {
    let file = write_config("debug_only = true\nemails = []");
    assert!(AuditConfig::load(file.path()).is_ok());
}

#[test]
fn loads_credentials() {
    let file = write_config(
        r#"
[acquia]
key_id = "d2693c6e-58e7-44c9-ab60-a788a2f3f47b"
secret = "supersecret"
"#,
    );

    let creds = Credentials::load(file.path()).unwrap();
    assert_eq!(creds.acquia.key_id, "d2693c6e-58e7-44c9-ab60-a788a2f3f47b");
    assert_eq!(creds.acquia.secret, "supersecret");
}

#[test]
fn missing_credentials_file_is_file_not_found() {
    let result = Credentials::load("no-such-creds.toml");
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}
