//! Simulated login: an email-domain check followed by a fixed delay.
//!
//! Nothing here talks to a server. The delay runs on a tokio task owned by
//! a [`PendingLogin`]; dropping the handle aborts the task, so a login that
//! is still in flight when its owner goes away never reports back.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::event::Event;
use crate::model::{Credentials, Institution, LoginError, UserProfile};

pub const DEFAULT_LOGIN_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Authenticator {
    institution: Institution,
    delay: Duration,
}

impl Authenticator {
    pub fn new(institution: Institution, delay: Duration) -> Self {
        Self { institution, delay }
    }

    pub fn institution(&self) -> &Institution {
        &self.institution
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Synchronous part of the login. Runs before any delay starts.
    pub fn validate(&self, credentials: &Credentials) -> Result<(), LoginError> {
        self.institution.validate_email(&credentials.email)
    }

    /// Validate, wait out the simulated latency, then build the profile.
    pub async fn login(&self, credentials: Credentials) -> Result<UserProfile, LoginError> {
        self.validate(&credentials)?;
        tokio::time::sleep(self.delay).await;
        let profile = UserProfile::from_email(&credentials.email);
        info!(email = %profile.email, "login accepted");
        Ok(profile)
    }

    /// Validate now, then finish the login in the background. On success
    /// the profile arrives as [`Event::LoginCompleted`] tagged with `ticket`.
    pub fn spawn_login(
        &self,
        credentials: Credentials,
        ticket: u64,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Result<PendingLogin, LoginError> {
        self.validate(&credentials)?;

        let auth = self.clone();
        debug!(ticket, delay_ms = self.delay.as_millis() as u64, "login started");
        let handle = tokio::spawn(async move {
            if let Ok(profile) = auth.login(credentials).await {
                let _ = tx.send(Event::LoginCompleted { ticket, profile });
            }
        });

        Ok(PendingLogin { ticket, handle })
    }
}

impl Default for Authenticator {
    fn default() -> Self {
        Self::new(Institution::default(), DEFAULT_LOGIN_DELAY)
    }
}

/// Handle to an in-flight login. Aborts the task on drop.
#[derive(Debug)]
pub struct PendingLogin {
    ticket: u64,
    handle: JoinHandle<()>,
}

impl PendingLogin {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn cancel(self) {
        debug!(ticket = self.ticket, "login cancelled");
        // Drop does the abort.
    }
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
