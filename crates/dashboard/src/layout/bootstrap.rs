//! Main layout wiring
//!
//! [`MainLayout`] ties the collaborators together. It reads the route,
//! starts analytics, loads organizations and quota state on activation and
//! mount, augments the navigation, and starts the session refresh chain.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use url::Url;

use super::analytics::AnalyticsTracker;
use super::navigation;
use super::quota::{QuotaCheck, QuotaMessenger};
use super::session::{RefreshHandle, SessionRefresher};
use crate::api::{BillingService, OrganizationService, UserService};
use crate::auth::TokenStore;
use crate::config::DashboardConfig;
use crate::models::{MenuEntry, Organization};
use crate::sink::ErrorSink;
use crate::state::StateStore;

/// Organizations fetched per bootstrap
pub const ORGANIZATION_PAGE_SIZE: usize = 1000;
/// Route query parameter naming an organization to switch to
pub const ORG_IDENTIFIER_PARAM: &str = "org_identifier";

/// Collaborators the layout is built from
pub struct LayoutServices {
    pub organizations: Arc<dyn OrganizationService>,
    pub billing: Arc<dyn BillingService>,
    pub users: Arc<dyn UserService>,
    pub tokens: Arc<dyn TokenStore>,
    pub state: Arc<dyn StateStore>,
    pub errors: Arc<dyn ErrorSink>,
    /// Only used when analytics is enabled
    pub tracker: Option<Arc<dyn AnalyticsTracker>>,
}

/// An organization as offered in the switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgOption {
    pub label: String,
    pub value: String,
}

impl From<&Organization> for OrgOption {
    fn from(org: &Organization) -> Self {
        let label = if org.name.is_empty() {
            org.identifier.clone()
        } else {
            org.name.clone()
        };
        Self {
            label,
            value: org.identifier.clone(),
        }
    }
}

/// Outcome of one bootstrap pass
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapReport {
    /// Whether the organization list was fetched and published
    pub organizations_loaded: bool,
    pub quota: QuotaCheck,
}

/// Read the organization requested by the route, if any
pub fn custom_organization(route: &Url) -> Option<String> {
    route
        .query_pairs()
        .find(|(key, _)| key == ORG_IDENTIFIER_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// The dashboard's main layout state and operations
pub struct MainLayout {
    asset_base_url: String,
    organizations: Arc<dyn OrganizationService>,
    state: Arc<dyn StateStore>,
    errors: Arc<dyn ErrorSink>,
    quota: QuotaMessenger,
    refresher: Arc<SessionRefresher>,
    custom_organization: Option<String>,
    selected_org: Option<Organization>,
}

impl MainLayout {
    /// Set up the layout for the current route
    ///
    /// Starts analytics (when enabled) and identifies the current user.
    pub fn setup(config: &DashboardConfig, services: LayoutServices, route: Option<&Url>) -> Self {
        let custom_organization = route.and_then(custom_organization);
        let selected_org = services.state.selected_organization();

        if config.enable_analytics {
            if let Some(tracker) = &services.tracker {
                match tracker
                    .start(&config.open_replay_key)
                    .context("analytics tracker start")
                {
                    Ok(()) => {
                        let email = services
                            .state
                            .user_info()
                            .map(|info| info.email)
                            .unwrap_or_default();
                        tracker.set_user_id(&email);
                    }
                    Err(e) => services.errors.report("analytics", &e),
                }
            }
        }

        let quota = QuotaMessenger::new(
            services.billing,
            services.state.clone(),
            services.errors.clone(),
            config.quota_threshold_percent,
        );
        let refresher = Arc::new(SessionRefresher::new(
            services.users,
            services.tokens,
            services.state.clone(),
            services.errors.clone(),
        ));

        Self {
            asset_base_url: config.asset_base_url.clone(),
            organizations: services.organizations,
            state: services.state,
            errors: services.errors,
            quota,
            refresher,
            custom_organization,
            selected_org,
        }
    }

    /// Organization named by the route's `org_identifier` parameter
    pub fn custom_organization(&self) -> Option<&str> {
        self.custom_organization.as_deref()
    }

    /// Organization that was selected when the layout was set up
    pub fn selected_org(&self) -> Option<&Organization> {
        self.selected_org.as_ref()
    }

    /// Switcher entries for the currently published organizations
    pub fn org_options(&self) -> Vec<OrgOption> {
        self.state
            .organizations()
            .iter()
            .map(OrgOption::from)
            .collect()
    }

    /// Add the Functions and Organizations entries to the left navigation
    pub fn left_navigation_links<'a, T>(&self, links: &'a mut Vec<MenuEntry>, t: T) -> &'a [MenuEntry]
    where
        T: Fn(&str) -> String,
    {
        navigation::left_navigation_links(links, t, &self.asset_base_url)
    }

    /// Fetch the organization list and publish it
    pub fn load_organizations(&self) -> bool {
        let result = self
            .organizations
            .list(0, ORGANIZATION_PAGE_SIZE, "id", false, "")
            .context("organization list");

        match result {
            Ok(organizations) => {
                debug!("Fetched {} organizations", organizations.len());
                self.state.set_organizations(organizations);
                true
            }
            Err(e) => {
                self.errors.report("organizations", &e);
                false
            }
        }
    }

    /// Publish the quota banner for the selected organization
    pub fn check_quota(&self) -> QuotaCheck {
        self.quota.check()
    }

    /// Load organizations and quota state
    ///
    /// The two steps are independent: a failed organization fetch does not
    /// stop the quota check.
    ///
    /// Publishing the list leaves the selection untouched, so the quota check
    /// reads the organization that was selected before this call. Callers that
    /// pick a selection from the fresh list run [`MainLayout::check_quota`]
    /// afterwards.
    pub fn bootstrap(&self) -> BootstrapReport {
        let organizations_loaded = self.load_organizations();
        let quota = self.check_quota();
        BootstrapReport {
            organizations_loaded,
            quota,
        }
    }

    /// The layout became active again
    pub fn on_activated(&self) -> BootstrapReport {
        self.bootstrap()
    }

    /// The layout was mounted
    pub fn on_mounted(&self) -> BootstrapReport {
        self.bootstrap()
    }

    /// Start a session refresh chain
    ///
    /// Each call starts another independent chain.
    pub fn start_session_refresh(&self) -> Result<RefreshHandle> {
        self.refresher.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_organization_from_route() {
        let route = Url::parse("https://app.example.com/web/logs?org_identifier=acme_1&x=2").unwrap();
        assert_eq!(custom_organization(&route).as_deref(), Some("acme_1"));
    }

    #[test]
    fn test_custom_organization_absent() {
        let route = Url::parse("https://app.example.com/web/logs?x=2").unwrap();
        assert!(custom_organization(&route).is_none());

        let route = Url::parse("https://app.example.com/web/?org_identifier=").unwrap();
        assert!(custom_organization(&route).is_none());
    }

    #[test]
    fn test_org_option_label() {
        let named = Organization::new("acme_1").with_name("Acme");
        assert_eq!(
            OrgOption::from(&named),
            OrgOption {
                label: "Acme".to_string(),
                value: "acme_1".to_string()
            }
        );

        let unnamed = Organization::new("default");
        assert_eq!(OrgOption::from(&unnamed).label, "default");
    }
}
