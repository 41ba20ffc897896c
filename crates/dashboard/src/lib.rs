//! Dashboard crate - Business logic for the console's main layout
//!
//! This crate provides platform-independent layout functionality including:
//! - Domain models (Organization, QuotaUsage, MenuEntry, SessionToken)
//! - Dashboard API client and service traits
//! - ID token decoding and local token storage
//! - Shared state store abstraction
//! - Layout operations: bootstrap, navigation, quota warnings, token refresh
//!
//! This crate has zero UI dependencies. Network calls are synchronous so
//! callers can drive it from any executor or thread.

pub mod api;
pub mod auth;
pub mod config;
pub mod layout;
pub mod models;
pub mod sink;
pub mod state;

pub use api::{ApiClient, ApiStatusError, BillingService, OrganizationService, UserService};
pub use auth::{FileTokenStore, MemoryTokenStore, TokenError, TokenStore};
pub use crate::config::DashboardConfig;
pub use layout::{
    AnalyticsTracker, BootstrapReport, LayoutServices, LogTracker, MainLayout, OrgOption,
    QuotaCheck, RefreshHandle, RefreshStop, SessionRefresher,
};
pub use models::{
    LoginState, MenuEntry, Organization, QuotaUsage, SessionToken, SubscriptionType, UserInfo,
};
pub use sink::{ErrorSink, LogErrorSink};
pub use state::{InMemoryStateStore, StateStore};
