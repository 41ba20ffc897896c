//! Dashboard API HTTP client
//!
//! Implements the organization, billing and user services over HTTP.
//! Uses synchronous HTTP (ureq) to be executor-agnostic.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use super::wire::{Envelope, RefreshTokenResponse};
use super::{BillingService, OrganizationService, UserService};
use crate::auth::TokenStore;
use crate::models::{Organization, QuotaUsage};

/// Error for a non-success HTTP status from the dashboard API
#[derive(Debug, thiserror::Error)]
#[error("{path} returned HTTP {status}")]
pub struct ApiStatusError {
    pub status: u16,
    pub path: String,
}

/// HTTP client for the dashboard API
pub struct ApiClient {
    base_url: Url,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    const ORGANIZATIONS_PATH: &'static str = "api/organizations";
    const REFRESH_TOKEN_PATH: &'static str = "auth/refresh_token";

    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - Root of the dashboard API, e.g. `https://api.example.com`
    /// * `tokens` - Source of the bearer token attached to each request
    pub fn new(base_url: &str, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        // Url::join drops the last path segment unless the base ends in '/'
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        Ok(Self { base_url, tokens })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Invalid API path: {}", path))
    }

    /// GET a JSON endpoint and unwrap its `data` envelope
    fn get_data<T: DeserializeOwned>(&self, url: &Url) -> Result<T> {
        let mut request = ureq::get(url.as_str());

        if let Some(token) = self.tokens.load()? {
            request = request.header("Authorization", &format!("Bearer {}", token.id_token));
        }

        let mut response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => {
                return Err(ApiStatusError {
                    status,
                    path: url.path().to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Failed to send request to {}: {}", url.path(), e));
            }
        };

        let envelope: Envelope<T> = response
            .body_mut()
            .read_json()
            .with_context(|| format!("Failed to parse response from {}", url.path()))?;

        Ok(envelope.data)
    }
}

impl OrganizationService for ApiClient {
    fn list(
        &self,
        offset: usize,
        limit: usize,
        sort_by: &str,
        desc: bool,
        filter: &str,
    ) -> Result<Vec<Organization>> {
        let mut url = self.endpoint(Self::ORGANIZATIONS_PATH)?;
        url.query_pairs_mut()
            .append_pair("page_num", &offset.to_string())
            .append_pair("page_size", &limit.to_string())
            .append_pair("sort_by", sort_by)
            .append_pair("desc", if desc { "true" } else { "false" })
            .append_pair("name", filter);

        self.get_data(&url)
    }
}

impl BillingService for ApiClient {
    fn quota_threshold(&self, org_identifier: &str) -> Result<QuotaUsage> {
        let path = format!(
            "api/{}/billings/quota_threshold",
            urlencoding::encode(org_identifier)
        );
        let url = self.endpoint(&path)?;
        self.get_data(&url)
    }
}

impl UserService for ApiClient {
    fn refresh_token(&self) -> Result<String> {
        let url = self.endpoint(Self::REFRESH_TOKEN_PATH)?;
        let response: RefreshTokenResponse = self.get_data(&url)?;
        Ok(response.id_token)
    }
}
