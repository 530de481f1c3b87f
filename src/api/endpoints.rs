//! Endpoint resolution for the two deployment variants
//!
//! The legacy client talks to the backend directly; the current one goes
//! through an origin that mounts the backend under `/api`.

use crate::errors::{DashboardError, Result};
use crate::types::StudentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend address used by the legacy client
pub const LEGACY_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default origin serving the current client and its `/api` mount
pub const CURRENT_ORIGIN: &str = "http://localhost:3000";

/// Path prefix of the current deployment
pub const CURRENT_API_PREFIX: &str = "/api";

/// Endpoint variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiProfile {
    Legacy,
    Current,
}

impl ApiProfile {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            ApiProfile::Legacy => LEGACY_BASE_URL,
            ApiProfile::Current => CURRENT_ORIGIN,
        }
    }

    pub fn default_prefix(&self) -> &'static str {
        match self {
            ApiProfile::Legacy => "",
            ApiProfile::Current => CURRENT_API_PREFIX,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiProfile::Legacy => "legacy",
            ApiProfile::Current => "current",
        }
    }
}

impl fmt::Display for ApiProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiProfile {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(ApiProfile::Legacy),
            "current" => Ok(ApiProfile::Current),
            other => Err(DashboardError::ConfigError(format!(
                "Unknown API profile: {}",
                other
            ))),
        }
    }
}

/// Resolved backend endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    root: String,
}

impl Endpoints {
    /// Join base URL and prefix; trailing slashes are dropped from both
    pub fn new(base_url: &str, prefix: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let prefix = prefix.trim_end_matches('/');
        Self {
            root: format!("{}{}", base, prefix),
        }
    }

    pub fn for_profile(profile: ApiProfile) -> Self {
        Self::new(profile.default_base_url(), profile.default_prefix())
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn dashboard(&self, id: StudentId) -> String {
        format!("{}/dashboard/student/{}", self.root, id)
    }

    pub fn adviser_student(&self, id: StudentId) -> String {
        format!("{}/adviser/student/{}", self.root, id)
    }

    pub fn ask(&self, id: StudentId) -> String {
        format!("{}/ask/{}", self.root, id)
    }
}
