//! Free-tier quota warnings
//!
//! Usage is compared against a "near-threshold" cutoff, a configured
//! percentage of each hard quota. Crossing either cutoff produces a message
//! for the layout banner.

use std::sync::Arc;

use anyhow::Context;
use log::debug;

use crate::api::BillingService;
use crate::models::{Organization, QuotaUsage};
use crate::sink::ErrorSink;
use crate::state::StateStore;

pub const EXCEEDED_TEMPLATE: &str =
    "You’ve exceeded monthly free limit. Search: [SEARCH_USAGE]%, Ingestion: [INGEST_USAGE]%";
pub const APPROACHING_TEMPLATE: &str =
    "You’re approaching monthly free limit. Search: [SEARCH_USAGE]%, Ingestion: [INGEST_USAGE]%";

/// Cutoff at which warnings start: `floor(threshold * percent / 100)`
pub fn near_threshold(threshold: f64, percent: u32) -> f64 {
    (threshold * f64::from(percent) / 100.0).floor()
}

/// Usage as a display percentage of the threshold
///
/// Two decimals, capped at "100", and "0" for a zero threshold.
pub fn usage_percentage(usage: f64, threshold: f64) -> String {
    if threshold <= 0.0 {
        return "0".to_string();
    }

    let percentage = usage / threshold * 100.0;
    let rounded = (percentage * 100.0).round() / 100.0;
    if rounded <= 100.0 {
        format!("{:.2}", percentage)
    } else {
        "100".to_string()
    }
}

/// Build the banner message for an organization's usage
///
/// Returns an empty string when neither axis is past its cutoff.
pub fn quota_message(organization: &Organization, usage: QuotaUsage, percent: u32) -> String {
    let search_near = near_threshold(organization.search_threshold, percent);
    let ingest_near = near_threshold(organization.ingest_threshold, percent);

    if usage.search <= search_near && usage.ingest <= ingest_near {
        return String::new();
    }

    // The stronger wording keys off the cutoff values, not the usage
    let template = if search_near >= 100.0 || ingest_near >= 100.0 {
        EXCEEDED_TEMPLATE
    } else {
        APPROACHING_TEMPLATE
    };

    template
        .replacen(
            "[SEARCH_USAGE]",
            &usage_percentage(usage.search, organization.search_threshold),
            1,
        )
        .replacen(
            "[INGEST_USAGE]",
            &usage_percentage(usage.ingest, organization.ingest_threshold),
            1,
        )
}

/// Result of a quota check
#[derive(Debug, Clone, PartialEq)]
pub enum QuotaCheck {
    /// No organization selected, or it is not on the free plan
    Skipped,
    /// The message (possibly empty) was published
    Published(String),
    /// Usage could not be fetched; nothing was published
    Failed,
}

/// Fetches usage for the selected organization and publishes the banner
pub struct QuotaMessenger {
    billing: Arc<dyn BillingService>,
    state: Arc<dyn StateStore>,
    errors: Arc<dyn ErrorSink>,
    threshold_percent: u32,
}

impl QuotaMessenger {
    pub fn new(
        billing: Arc<dyn BillingService>,
        state: Arc<dyn StateStore>,
        errors: Arc<dyn ErrorSink>,
        threshold_percent: u32,
    ) -> Self {
        Self {
            billing,
            state,
            errors,
            threshold_percent,
        }
    }

    /// Check the currently selected organization
    pub fn check(&self) -> QuotaCheck {
        let organization = match self.state.selected_organization() {
            Some(org) if org.subscription_type.is_free_tier() => org,
            _ => return QuotaCheck::Skipped,
        };

        let usage = match self
            .billing
            .quota_threshold(&organization.identifier)
            .with_context(|| format!("quota threshold for {}", organization.identifier))
        {
            Ok(usage) => usage,
            Err(e) => {
                self.errors.report("quota threshold", &e);
                return QuotaCheck::Failed;
            }
        };

        debug!(
            "Quota usage for {}: search={} ingest={}",
            organization.identifier, usage.search, usage.ingest
        );

        let message = quota_message(&organization, usage, self.threshold_percent);
        self.state.set_quota_threshold_msg(message.clone());
        QuotaCheck::Published(message)
    }
}
