//! Session token refresh chain
//!
//! Each cycle fetches a fresh ID token, stores it, publishes the login
//! state and waits until 30 seconds before the new token expires. A failed
//! cycle ends the chain; there is no retry.
//!
//! A chain runs on its own thread and is owned by a [`RefreshHandle`].
//! Cancelling or dropping the handle ends the pending wait.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info, warn};

use crate::api::UserService;
use crate::auth::{TokenStore, user_info_from_fragment};
use crate::models::{LoginState, SessionToken};
use crate::sink::ErrorSink;
use crate::state::StateStore;

/// Refresh this many seconds before the token expires
pub const EXPIRY_MARGIN_SECS: i64 = 30;

/// Delay until the next refresh, given the token expiry and the current
/// time (both seconds since epoch)
///
/// Already-due refreshes get a zero delay and run immediately.
pub fn reschedule_delay(expires_at: i64, now_secs: i64) -> Duration {
    let millis = expires_at
        .saturating_sub(now_secs)
        .saturating_sub(EXPIRY_MARGIN_SECS)
        .saturating_mul(1000);
    Duration::from_millis(millis.max(0) as u64)
}

/// Why a refresh chain stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStop {
    /// A cycle failed and the chain ended
    Failed,
    /// The owning handle cancelled the chain
    Cancelled,
}

/// Renews the session's ID token
pub struct SessionRefresher {
    users: Arc<dyn UserService>,
    tokens: Arc<dyn TokenStore>,
    state: Arc<dyn StateStore>,
    errors: Arc<dyn ErrorSink>,
}

impl SessionRefresher {
    pub fn new(
        users: Arc<dyn UserService>,
        tokens: Arc<dyn TokenStore>,
        state: Arc<dyn StateStore>,
        errors: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            users,
            tokens,
            state,
            errors,
        }
    }

    /// Run a single refresh cycle
    ///
    /// Returns the delay before the next cycle should run.
    pub fn refresh_once(&self) -> Result<Duration> {
        let id_token = self.users.refresh_token().context("refresh token request")?;

        let user_info = match user_info_from_fragment(&format!("#id_token={}", id_token)) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Refreshed token carries no readable identity: {}", e);
                None
            }
        };

        // A failed local write does not end the chain; requests fall back to
        // whatever token the store still holds
        let expires_at = user_info.as_ref().and_then(|info| info.exp);
        if let Err(e) = self
            .tokens
            .save(&SessionToken::new(id_token, expires_at))
            .context("Failed to store refreshed token")
        {
            self.errors.report("token storage", &e);
        }

        if let Some(info) = user_info {
            self.state.login(LoginState::logged_in(info));
        }

        // Schedule from whatever identity the store now holds
        let exp = self
            .state
            .user_info()
            .and_then(|info| info.exp)
            .context("Session has no token expiry to schedule the next refresh from")?;

        Ok(reschedule_delay(exp, Utc::now().timestamp()))
    }

    /// Start a refresh chain on a background thread
    ///
    /// The first cycle runs immediately. Every call starts an independent
    /// chain.
    pub fn start(self: &Arc<Self>) -> Result<RefreshHandle> {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        let refresher = Arc::clone(self);

        let thread = thread::Builder::new()
            .name("session-refresh".to_string())
            .spawn(move || refresher.run(cancel_rx))
            .context("Failed to spawn session refresh thread")?;

        Ok(RefreshHandle {
            cancel: Some(cancel_tx),
            thread: Some(thread),
        })
    }

    fn run(&self, cancel: Receiver<()>) -> RefreshStop {
        info!("Session refresh chain started");

        loop {
            let delay = match self.refresh_once() {
                Ok(delay) => delay,
                Err(e) => {
                    self.errors.report("refresh token", &e);
                    info!("Session refresh chain ended after failure");
                    return RefreshStop::Failed;
                }
            };

            debug!("Next token refresh in {}ms", delay.as_millis());

            match cancel.recv_timeout(delay) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                    info!("Session refresh chain cancelled");
                    return RefreshStop::Cancelled;
                }
            }
        }
    }
}

/// Owner of a running refresh chain
///
/// Dropping the handle cancels the chain without waiting for it.
pub struct RefreshHandle {
    cancel: Option<Sender<()>>,
    thread: Option<JoinHandle<RefreshStop>>,
}

impl RefreshHandle {
    /// Whether the chain has stopped
    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }

    /// Cancel the pending wait and wait for the chain to stop
    ///
    /// A cycle already in flight completes first.
    pub fn cancel(mut self) -> RefreshStop {
        if let Some(cancel) = self.cancel.take() {
            // The chain may already be gone
            let _ = cancel.send(());
        }
        self.wait()
    }

    /// Wait for the chain to stop on its own
    pub fn join(mut self) -> RefreshStop {
        self.wait()
    }

    fn wait(&mut self) -> RefreshStop {
        match self.thread.take() {
            Some(thread) => thread.join().unwrap_or(RefreshStop::Failed),
            None => RefreshStop::Cancelled,
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }
}
