//! Session models: ID token, decoded user identity and login state

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Identity claims carried by an ID token
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    /// Expiry, seconds since epoch
    #[serde(default)]
    pub exp: Option<i64>,
}

/// An opaque ID token plus the expiry read from its claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionToken {
    pub id_token: String,
    pub expires_at: Option<i64>,
}

impl SessionToken {
    pub fn new(id_token: impl Into<String>, expires_at: Option<i64>) -> Self {
        Self {
            id_token: id_token.into(),
            expires_at,
        }
    }

    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
    }

    /// A token without an expiry is treated as still valid
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now_secs)
    }
}

/// Login state as published to the shared store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginState {
    pub logged_in: bool,
    pub user_info: Option<UserInfo>,
}

impl LoginState {
    pub fn logged_in(user_info: UserInfo) -> Self {
        Self {
            logged_in: true,
            user_info: Some(user_info),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_expiry() {
        let token = SessionToken::new("abc", Some(1_000));
        assert!(!token.is_expired(999));
        assert!(token.is_expired(1_000));
        assert!(token.is_expired(5_000));
        assert_eq!(token.expires_at_utc().unwrap().timestamp(), 1_000);
    }

    #[test]
    fn test_token_without_expiry() {
        let token = SessionToken::new("abc", None);
        assert!(!token.is_expired(i64::MAX));
        assert!(token.expires_at_utc().is_none());
    }

    #[test]
    fn test_user_info_ignores_unknown_claims() {
        let json = r#"{"email": "a@b.c", "exp": 12, "iss": "dex", "aud": "web"}"#;
        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.email, "a@b.c");
        assert_eq!(info.exp, Some(12));
        assert!(info.name.is_none());
    }
}
