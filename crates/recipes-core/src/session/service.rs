//! Session service: login, logout and current-user lookup.

use std::sync::Arc;

use super::model::Session;
use super::repository::SessionRepository;
use crate::error::{RecipeError, Result};

/// Manages the single local session.
#[derive(Clone)]
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Logs in as `name`.
    ///
    /// # Errors
    ///
    /// - [`RecipeError::Validation`] if `name` is blank after trimming; nothing is stored.
    /// - Storage errors from the repository.
    pub fn login(&self, name: &str) -> Result<Session> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RecipeError::validation("name", "please enter your name"));
        }
        self.repository.store_name(name)?;
        tracing::info!("Logged in as '{}'", name);
        Ok(Session::for_name(name))
    }

    /// Clears the stored session.
    pub fn logout(&self) -> Result<()> {
        self.repository.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Returns the active session, or `None` when nobody is logged in.
    ///
    /// Storage read failures are logged and reported as "no session".
    pub fn current_user(&self) -> Option<Session> {
        match self.repository.load_name() {
            Ok(Some(name)) if !name.trim().is_empty() => Some(Session::for_name(name)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                None
            }
        }
    }

    /// Whether a session is active.
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }
}
