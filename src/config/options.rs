// src/config/options.rs
use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};

/// Everything the fetch layer needs, passed explicitly instead of living in globals.
/// Every key is optional in the TOML file; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub base_url: String,
    pub username: Option<String>,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub workers: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            username: None,
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            workers: WORKERS,
        }
    }
}

impl FetchConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Configured username, or `NotLoggedIn` when missing/blank.
    pub fn user(&self) -> Result<&str> {
        match self.username.as_deref().map(str::trim) {
            Some(u) if !u.is_empty() => Ok(u),
            _ => Err(Error::NotLoggedIn),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Absolute URL for a site path. Tolerates a trailing '/' on the base.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() || path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CourseSelector {
    /// Every course listed on the dashboard.
    All,
    Named(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub fetch: FetchConfig,
    pub courses: CourseSelector,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            courses: CourseSelector::All,
        }
    }
}
