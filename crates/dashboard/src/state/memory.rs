//! In-memory state store
//!
//! Each field sits behind its own RwLock so publishers never contend
//! with readers of unrelated state.

use std::sync::RwLock;

use log::debug;

use super::StateStore;
use crate::models::{LoginState, Organization};

/// In-memory implementation of StateStore
pub struct InMemoryStateStore {
    organizations: RwLock<Vec<Organization>>,
    selected_organization: RwLock<Option<Organization>>,
    quota_threshold_msg: RwLock<String>,
    login: RwLock<LoginState>,
}

impl InMemoryStateStore {
    /// Create an empty store with nobody logged in
    pub fn new() -> Self {
        Self {
            organizations: RwLock::new(Vec::new()),
            selected_organization: RwLock::new(None),
            quota_threshold_msg: RwLock::new(String::new()),
            login: RwLock::new(LoginState::default()),
        }
    }

    /// Create a store with an organization already selected
    pub fn with_selected(organization: Organization) -> Self {
        let store = Self::new();
        *store.selected_organization.write().unwrap() = Some(organization);
        store
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for InMemoryStateStore {
    fn set_organizations(&self, organizations: Vec<Organization>) {
        debug!("Publishing {} organizations", organizations.len());
        *self.organizations.write().unwrap() = organizations;
    }

    fn organizations(&self) -> Vec<Organization> {
        self.organizations.read().unwrap().clone()
    }

    fn set_selected_organization(&self, organization: Option<Organization>) {
        *self.selected_organization.write().unwrap() = organization;
    }

    fn selected_organization(&self) -> Option<Organization> {
        self.selected_organization.read().unwrap().clone()
    }

    fn set_quota_threshold_msg(&self, message: String) {
        debug!("Publishing quota message: {:?}", message);
        *self.quota_threshold_msg.write().unwrap() = message;
    }

    fn quota_threshold_msg(&self) -> String {
        self.quota_threshold_msg.read().unwrap().clone()
    }

    fn login(&self, state: LoginState) {
        *self.login.write().unwrap() = state;
    }

    fn login_state(&self) -> LoginState {
        self.login.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInfo;

    #[test]
    fn test_organizations_replaced_wholesale() {
        let store = InMemoryStateStore::new();
        store.set_organizations(vec![Organization::new("a"), Organization::new("b")]);
        store.set_organizations(vec![Organization::new("c")]);

        let orgs = store.organizations();
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].identifier, "c");
    }

    #[test]
    fn test_with_selected() {
        let store = InMemoryStateStore::with_selected(Organization::new("default"));
        assert_eq!(store.selected_organization().unwrap().identifier, "default");

        store.set_selected_organization(None);
        assert!(store.selected_organization().is_none());
    }

    #[test]
    fn test_login_state() {
        let store = InMemoryStateStore::new();
        assert!(!store.login_state().logged_in);
        assert!(store.user_info().is_none());

        store.login(LoginState::logged_in(UserInfo {
            email: "user@example.com".to_string(),
            exp: Some(100),
            ..Default::default()
        }));

        assert!(store.login_state().logged_in);
        assert_eq!(store.user_info().unwrap().email, "user@example.com");
    }

    #[test]
    fn test_quota_message() {
        let store = InMemoryStateStore::new();
        assert_eq!(store.quota_threshold_msg(), "");
        store.set_quota_threshold_msg("warning".to_string());
        assert_eq!(store.quota_threshold_msg(), "warning");
    }
}
