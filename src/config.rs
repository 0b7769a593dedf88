//! Resolved runtime configuration for the dashboard.

use std::path::PathBuf;
use std::time::Duration;

use crate::auth::{Authenticator, DEFAULT_LOGIN_DELAY};
use crate::model::{Category, Institution};
use crate::theme::Theme;

/// Environment variable overriding where the dashboard writes its log.
pub const LOG_DIR_ENV: &str = "SINGO_DASHBOARD_LOG_DIR";

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Seed file; the built-in data is used when absent.
    pub data: Option<PathBuf>,
    pub start_tab: Category,
    pub institution: Institution,
    pub login_delay: Duration,
    pub theme: Theme,
}

impl DashboardConfig {
    pub fn authenticator(&self) -> Authenticator {
        Authenticator::new(self.institution.clone(), self.login_delay)
    }

    pub fn log_dir() -> PathBuf {
        std::env::var(LOG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::temp_dir().join("singo-dashboard"))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data: None,
            start_tab: Category::Facility,
            institution: Institution::default(),
            login_delay: DEFAULT_LOGIN_DELAY,
            theme: Theme::default(),
        }
    }
}
