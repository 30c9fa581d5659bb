//! REST client for the lead store
//!
//! Inserts go through the PostgREST interface (`/rest/v1/<table>`) using the
//! project's public access key, which is sent both as `apikey` and as a bearer
//! token.

use super::error::{ConfigurationError, RepositoryError};
use super::traits::LeadRepository;
use crate::config::{RepositoryConfig, STORE_KEY_VAR, STORE_URL_VAR};
use crate::state::LeadRecord;
use async_trait::async_trait;
use tracing::{debug, info};

/// Table receiving intake rows
const LEADS_TABLE: &str = "leads";

/// Lead repository backed by a PostgREST endpoint
pub struct RestLeadRepository {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl RestLeadRepository {
    /// Build the client from configuration.
    ///
    /// Fails when the endpoint or the access key is missing. No request is
    /// made here.
    pub fn initialize(config: &RepositoryConfig) -> Result<Self, ConfigurationError> {
        let endpoint = required(config.endpoint.as_deref(), STORE_URL_VAR)?;
        let access_key = required(config.access_key.as_deref(), STORE_KEY_VAR)?;

        debug!(endpoint = %endpoint, "lead store client initialized");

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
        })
    }

    fn insert_url(&self) -> String {
        format!("{}/rest/v1/{}", self.endpoint, LEADS_TABLE)
    }
}

fn required<'a>(
    value: Option<&'a str>,
    variable: &'static str,
) -> Result<&'a str, ConfigurationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigurationError { variable })
}

#[async_trait]
impl LeadRepository for RestLeadRepository {
    async fn insert(&self, record: &LeadRecord) -> Result<(), RepositoryError> {
        let url = self.insert_url();

        info!(url = %url, "inserting lead");
        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.access_key)
            .bearer_auth(&self.access_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RepositoryError::Server {
                status: status.as_u16(),
                body,
            });
        }

        info!(status = status.as_u16(), "lead inserted");
        Ok(())
    }
}
