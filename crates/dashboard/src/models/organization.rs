//! Organization model representing a billable tenant

use serde::{Deserialize, Serialize};

/// Subscription plan attached to an organization
///
/// Only the free monthly plan is quota-checked; every other plan identifier
/// is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubscriptionType {
    FreeMonthly,
    Other(String),
}

impl SubscriptionType {
    /// Wire identifier of the free monthly plan
    pub const FREE_MONTHLY: &'static str = "Free-Plan-USD-Monthly";

    pub fn is_free_tier(&self) -> bool {
        matches!(self, Self::FreeMonthly)
    }
}

impl Default for SubscriptionType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for SubscriptionType {
    fn from(s: String) -> Self {
        if s == Self::FREE_MONTHLY {
            Self::FreeMonthly
        } else {
            Self::Other(s)
        }
    }
}

impl From<&str> for SubscriptionType {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<SubscriptionType> for String {
    fn from(t: SubscriptionType) -> Self {
        match t {
            SubscriptionType::FreeMonthly => SubscriptionType::FREE_MONTHLY.to_string(),
            SubscriptionType::Other(s) => s,
        }
    }
}

/// An organization as returned by the organization directory
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Numeric database id, when the directory reports one
    #[serde(default)]
    pub id: Option<i64>,
    /// Stable identifier used in API paths
    pub identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subscription_type: SubscriptionType,
    /// Monthly search quota
    #[serde(default)]
    pub search_threshold: f64,
    /// Monthly ingestion quota
    #[serde(default)]
    pub ingest_threshold: f64,
}

impl Organization {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_subscription(mut self, subscription: impl Into<SubscriptionType>) -> Self {
        self.subscription_type = subscription.into();
        self
    }

    pub fn with_thresholds(mut self, search: f64, ingest: f64) -> Self {
        self.search_threshold = search;
        self.ingest_threshold = ingest;
        self
    }
}
