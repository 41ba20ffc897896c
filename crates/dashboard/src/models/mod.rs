//! Domain models for the console layout

mod menu;
mod organization;
mod session;

pub use menu::MenuEntry;
pub use organization::{Organization, SubscriptionType};
pub use session::{LoginState, SessionToken, UserInfo};

use serde::{Deserialize, Serialize};

/// Consumed search/ingest amounts for the current billing period
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QuotaUsage {
    #[serde(default)]
    pub search: f64,
    #[serde(default)]
    pub ingest: f64,
}

impl QuotaUsage {
    pub fn new(search: f64, ingest: f64) -> Self {
        Self { search, ingest }
    }
}
