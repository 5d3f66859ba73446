//! Configuration loading
//!
//! Loads the audit configuration and the Acquia API credentials from TOML
//! files, with validation at load time.

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;

/// Default path of the audit configuration file
pub const CONFIG_PATH: &str = "config.toml";

/// Default path of the Acquia credentials file
pub const CREDS_PATH: &str = "creds.toml";

/// Audit configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    /// Print the report instead of emailing it
    #[serde(default)]
    pub debug_only: bool,

    /// Report recipients
    pub emails: Vec<String>,

    /// Substring patterns excluding domains from the check list
    #[serde(default)]
    pub patterns_to_ignore: Vec<String>,

    /// Substring patterns a domain must match to be checked; empty
    /// means check everything
    #[serde(default)]
    pub patterns_to_check: Vec<String>,

    /// Acquia application id, used when the environment doesn't
    /// provide one
    #[serde(default)]
    pub application_id: Option<String>,

    #[serde(default)]
    pub smtp: SmtpSettings,
}

/// SMTP delivery settings
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default = "default_smtp_from")]
    pub from: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    25
}

fn default_smtp_from() -> String {
    "cloudflare-dns-audit@localhost".to_string()
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            from: default_smtp_from(),
            username: None,
            password: None,
        }
    }
}

impl AuditConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: AuditConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Without recipients a non-debug run has nowhere to deliver to
        if !self.debug_only && self.emails.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "emails".to_string(),
            });
        }
        Ok(())
    }
}

/// Acquia Cloud API v2 credentials, only needed on the cloud path
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub acquia: AcquiaCredentials,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcquiaCredentials {
    pub key_id: String,
    pub secret: String,
}

impl Credentials {
    /// Load credentials from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}
