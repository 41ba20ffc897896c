//! Analytics tracker seam

use anyhow::Result;
use log::info;

/// Session analytics collaborator
pub trait AnalyticsTracker: Send + Sync {
    /// Begin recording for the given project
    fn start(&self, project_key: &str) -> Result<()>;

    /// Attach the current user's identity to the recording
    fn set_user_id(&self, user_id: &str);
}

/// Tracker that only logs what it would send
#[derive(Debug, Default)]
pub struct LogTracker;

impl AnalyticsTracker for LogTracker {
    fn start(&self, project_key: &str) -> Result<()> {
        info!("Analytics tracking started for project {}", project_key);
        Ok(())
    }

    fn set_user_id(&self, user_id: &str) {
        info!("Analytics user set to {}", user_id);
    }
}
