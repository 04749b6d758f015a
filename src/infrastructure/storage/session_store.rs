//! File-backed current-user session store.

use std::path::PathBuf;

use async_trait::async_trait;
use color_eyre::eyre::{Result, WrapErr};
use tokio::fs;
use tracing::warn;

use crate::domain::entities::UserSession;
use crate::domain::ports::SessionPort;
use crate::infrastructure::config::AppConfig;

/// Persists the current-user record across runs.
///
/// The record is written by the login flow and read-only everywhere else.
/// When no config directory can be determined, persistence is disabled and
/// every read yields `None`.
#[derive(Clone)]
pub struct SessionStore {
    session_path: Option<PathBuf>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a new session store in the platform config directory.
    #[must_use]
    pub fn new() -> Self {
        let session_path = AppConfig::state_dir().map(|dir| dir.join("session.toml"));
        if session_path.is_none() {
            warn!("Failed to determine project directories. Session persistence disabled.");
        }
        Self { session_path }
    }

    /// Creates a store rooted at an explicit path.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self {
            session_path: Some(path),
        }
    }

    /// Loads the persisted session from disk.
    ///
    /// A missing or unreadable-as-TOML file yields `Ok(None)`.
    ///
    /// # Errors
    /// Returns an error if an existing session file cannot be read.
    pub async fn load(&self) -> Result<Option<UserSession>> {
        let Some(path) = &self.session_path else {
            return Ok(None);
        };

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .await
            .wrap_err("Failed to read session file")?;

        Ok(toml::from_str(&content).ok())
    }

    /// Saves the session to disk, creating the config directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub async fn save(&self, session: &UserSession) -> Result<()> {
        let Some(path) = &self.session_path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .wrap_err("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(session).wrap_err("Failed to serialize session")?;

        fs::write(path, content)
            .await
            .wrap_err("Failed to write session file")?;

        Ok(())
    }
}

#[async_trait]
impl SessionPort for SessionStore {
    async fn current_user(&self) -> Option<UserSession> {
        match self.load().await {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "Failed to load session, continuing without one");
                None
            }
        }
    }
}
