//! Custom error types for the audit
//!
//! This module defines domain-specific error types using `thiserror` for
//! the failure modes that can occur while loading configuration, fetching
//! the domain list, and delivering the report.

use thiserror::Error;

/// Top-level error type for an audit run
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Domain source error: {0}")]
    Source(#[from] SourceError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse configuration: {message}")]
    Parse { message: String },

    #[error("missing required configuration: {key}")]
    MissingRequired { key: String },
}

/// Errors while obtaining the raw domain list
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("domain list file not found: {path}")]
    DomainFileNotFound { path: String },

    #[error("failed to read domain list from {path}: {message}")]
    DomainFileRead { path: String, message: String },

    #[error("no Acquia Cloud application id found or configured")]
    MissingApplicationId,

    #[error("OAuth token request failed: {message}")]
    Token { message: String },

    #[error("Acquia Cloud API request failed: {message}")]
    Api { message: String },

    #[error("no environment named {environment} found for application {application_id}")]
    NoMatchingEnvironment {
        environment: String,
        application_id: String,
    },

    #[error("environment {environment} has no domains")]
    EmptyDomainList { environment: String },
}

/// Report delivery errors
///
/// These are reported to the operator but never abort the run.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("invalid email address {address}: {message}")]
    InvalidAddress { address: String, message: String },

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Result type alias using AuditError
pub type Result<T> = std::result::Result<T, AuditError>;
