//! Dashboard API integration
//!
//! This module provides:
//! - Service traits for the organization, billing and user collaborators
//! - An HTTP client implementing all three against the dashboard API

mod client;

pub use client::{ApiClient, ApiStatusError};

use anyhow::Result;

use crate::models::{Organization, QuotaUsage};

/// Organization directory
pub trait OrganizationService: Send + Sync {
    /// List organizations, one page at a time
    ///
    /// # Arguments
    /// * `offset` - Page number to start from
    /// * `limit` - Maximum number of organizations to return
    /// * `sort_by` - Field to order by
    /// * `desc` - Descending order when true
    /// * `filter` - Name filter, empty for all
    fn list(
        &self,
        offset: usize,
        limit: usize,
        sort_by: &str,
        desc: bool,
        filter: &str,
    ) -> Result<Vec<Organization>>;
}

/// Billing and quota service
pub trait BillingService: Send + Sync {
    /// Current period usage for an organization
    fn quota_threshold(&self, org_identifier: &str) -> Result<QuotaUsage>;
}

/// User and authentication service
pub trait UserService: Send + Sync {
    /// Request a fresh ID token for the current session
    fn refresh_token(&self) -> Result<String>;
}

/// Dashboard API response types
pub mod wire {
    use serde::Deserialize;

    /// Every dashboard response wraps its payload in `data`
    #[derive(Debug, Deserialize)]
    pub struct Envelope<T> {
        pub data: T,
    }

    /// Payload of the refresh-token endpoint
    #[derive(Debug, Deserialize)]
    pub struct RefreshTokenResponse {
        pub id_token: String,
    }
}
