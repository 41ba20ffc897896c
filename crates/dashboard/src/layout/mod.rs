//! Main layout behavior
//!
//! - Bootstrap of organization and quota state
//! - Left-navigation augmentation
//! - Free-tier quota warnings
//! - Session token refresh chain
//! - Analytics tracker startup

mod analytics;
mod bootstrap;
mod navigation;
mod quota;
mod session;

pub use analytics::{AnalyticsTracker, LogTracker};
pub use bootstrap::{
    BootstrapReport, LayoutServices, MainLayout, ORG_IDENTIFIER_PARAM, ORGANIZATION_PAGE_SIZE,
    OrgOption, custom_organization,
};
pub use navigation::{FUNCTIONS_INDEX, ORGANIZATIONS_INDEX, image_url, left_navigation_links};
pub use quota::{
    APPROACHING_TEMPLATE, EXCEEDED_TEMPLATE, QuotaCheck, QuotaMessenger, near_threshold,
    quota_message, usage_percentage,
};
pub use session::{
    EXPIRY_MARGIN_SECS, RefreshHandle, RefreshStop, SessionRefresher, reschedule_delay,
};
