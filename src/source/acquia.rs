//! Acquia Cloud API v2 domain source
//!
//! Authenticates with an OAuth2 client-credentials grant, then lists the
//! environments of an application. The environment matching the site's
//! `AH_SITE_ENVIRONMENT` marker supplies the working domain list.

use crate::error::SourceError;
use serde::Deserialize;
use std::env;

const TOKEN_URL: &str = "https://accounts.acquia.com/api/auth/oauth/token";
const API_BASE: &str = "https://cloud.acquia.com/api";

/// Environment markers set on Acquia-hosted processes
#[derive(Debug, Clone)]
pub struct CloudMarkers {
    pub site_name: String,
    pub environment: String,
    pub application_uuid: Option<String>,
}

impl CloudMarkers {
    /// Detect the Acquia environment markers, if present
    pub fn from_env() -> Option<Self> {
        let site_name = env::var("AH_SITE_NAME").ok()?;
        let environment = env::var("AH_SITE_ENVIRONMENT").ok()?;
        Some(Self {
            site_name,
            environment,
            application_uuid: env::var("AH_APPLICATION_UUID").ok(),
        })
    }

    /// `<site>.<environment>` label used in progress output and the
    /// email subject
    pub fn docroot(&self) -> String {
        format!("{}.{}", self.site_name, self.environment)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// One environment record from the environments listing
#[derive(Debug, Clone, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
    pub application: ApplicationRef,
    #[serde(default)]
    pub domains: Vec<String>,
}

/// Parent application of an environment
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRef {
    pub name: String,
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
struct EnvironmentsEnvelope {
    #[serde(rename = "_embedded")]
    embedded: EmbeddedItems,
}

#[derive(Debug, Deserialize)]
struct EmbeddedItems {
    items: Vec<Environment>,
}

/// Authenticated Acquia Cloud API v2 client
pub struct AcquiaClient {
    http: reqwest::Client,
    access_token: String,
}

impl AcquiaClient {
    /// Acquire an access token with the client-credentials grant
    pub async fn connect(key_id: &str, secret: &str) -> Result<Self, SourceError> {
        let http = reqwest::Client::new();

        let response = http
            .post(TOKEN_URL)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", key_id),
                ("client_secret", secret),
            ])
            .send()
            .await
            .map_err(|e| SourceError::Token {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Token {
                message: format!("{status}: {body}"),
            });
        }

        let token: TokenResponse = response.json().await.map_err(|e| SourceError::Token {
            message: e.to_string(),
        })?;

        Ok(Self {
            http,
            access_token: token.access_token,
        })
    }

    /// List all environments of an application
    pub async fn environments(&self, application_id: &str) -> Result<Vec<Environment>, SourceError> {
        let url = format!("{API_BASE}/applications/{application_id}/environments");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| SourceError::Api {
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Api {
                message: format!("{status}: {body}"),
            });
        }

        let envelope: EnvironmentsEnvelope =
            response.json().await.map_err(|e| SourceError::Api {
                message: e.to_string(),
            })?;

        Ok(envelope.embedded.items)
    }
}

/// Pick the domain list of the environment named `environment_name`.
///
/// Fails when no environment matches or the matching environment has no
/// domains; both are fatal for the run.
pub fn domains_for_environment(
    environments: Vec<Environment>,
    environment_name: &str,
    application_id: &str,
) -> Result<Vec<String>, SourceError> {
    let environment = environments
        .into_iter()
        .find(|e| e.name == environment_name)
        .ok_or_else(|| SourceError::NoMatchingEnvironment {
            environment: environment_name.to_string(),
            application_id: application_id.to_string(),
        })?;

    if environment.domains.is_empty() {
        return Err(SourceError::EmptyDomainList {
            environment: environment_name.to_string(),
        });
    }
    Ok(environment.domains)
}
