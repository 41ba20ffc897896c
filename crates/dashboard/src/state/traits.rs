//! Shared layout state trait

use crate::models::{LoginState, Organization, UserInfo};

/// Shared state the layout reads and publishes into
///
/// Callers own the handle and its lifecycle; the layout only goes through
/// these mutation entry points.
pub trait StateStore: Send + Sync {
    /// Replace the organization list wholesale
    fn set_organizations(&self, organizations: Vec<Organization>);

    /// Current organization list
    fn organizations(&self) -> Vec<Organization>;

    /// Select the organization the layout operates on
    fn set_selected_organization(&self, organization: Option<Organization>);

    /// Currently selected organization
    fn selected_organization(&self) -> Option<Organization>;

    /// Publish the quota warning (empty string clears it)
    fn set_quota_threshold_msg(&self, message: String);

    /// Current quota warning
    fn quota_threshold_msg(&self) -> String;

    /// Publish login state and user identity
    fn login(&self, state: LoginState);

    /// Current login state
    fn login_state(&self) -> LoginState;

    /// Identity of the logged-in user, if any
    fn user_info(&self) -> Option<UserInfo> {
        self.login_state().user_info
    }
}
