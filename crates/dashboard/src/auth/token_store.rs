//! Local persistence of the session's ID token

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::models::SessionToken;

/// Where the current ID token is kept between requests
pub trait TokenStore: Send + Sync {
    /// Persist a freshly issued token, replacing any previous one
    fn save(&self, token: &SessionToken) -> Result<()>;

    /// Load the current token, if any
    fn load(&self) -> Result<Option<SessionToken>>;

    /// Forget the current token (logout)
    fn clear(&self) -> Result<()>;
}

/// Stored token data
#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    id_token: String,
    expires_at: Option<i64>,
}

/// Token store backed by a JSON file in the config directory
pub struct FileTokenStore {
    token_path: PathBuf,
}

impl FileTokenStore {
    pub fn new(token_path: impl Into<PathBuf>) -> Self {
        Self {
            token_path: token_path.into(),
        }
    }

    /// Store at the default location (~/.config/zinc/session-token.json)
    pub fn default_location() -> Result<Self> {
        let path = config::config_path("session-token.json")
            .context("Could not determine config directory")?;
        Ok(Self::new(path))
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, token: &SessionToken) -> Result<()> {
        let stored = StoredToken {
            id_token: token.id_token.clone(),
            expires_at: token.expires_at,
        };
        config::save_json_file(&self.token_path, &stored)
    }

    fn load(&self) -> Result<Option<SessionToken>> {
        if !self.token_path.exists() {
            return Ok(None);
        }
        let stored: StoredToken = config::load_json_file(&self.token_path)?;
        Ok(Some(SessionToken::new(stored.id_token, stored.expires_at)))
    }

    fn clear(&self) -> Result<()> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path).with_context(|| {
                format!("Failed to remove token file: {}", self.token_path.display())
            })?;
        }
        Ok(())
    }
}

/// Token store that lives only as long as the process
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<SessionToken>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &SessionToken) -> Result<()> {
        *self.token.write().unwrap() = Some(token.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionToken>> {
        Ok(self.token.read().unwrap().clone())
    }

    fn clear(&self) -> Result<()> {
        *self.token.write().unwrap() = None;
        Ok(())
    }
}
