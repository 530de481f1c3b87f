//! Configuration management for the advisor dashboard
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.advisor-dashboard/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use crate::api::{ApiProfile, Endpoints};
use crate::errors::{DashboardError, Result};
use crate::types::{StudentId, DEFAULT_CGPA_SCALE};

/// Directory under the home directory holding config and history
pub const STATE_DIR_NAME: &str = ".advisor-dashboard";

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub student: StudentConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Backend connection configuration
///
/// `base_url` and `api_prefix` fall back to the profile's defaults when unset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackendConfig {
    pub profile: ApiProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_prefix: Option<String>,
    pub timeout_secs: u64,
}

/// Signed-in student configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentConfig {
    pub default_id: StudentId,
}

/// Terminal display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub cgpa_scale: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            student: StudentConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::for_profile(ApiProfile::Legacy)
    }
}

impl BackendConfig {
    /// Defaults of one endpoint variant
    pub fn for_profile(profile: ApiProfile) -> Self {
        Self {
            profile,
            base_url: None,
            api_prefix: None,
            timeout_secs: 30,
        }
    }

    /// Effective base URL
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.profile.default_base_url())
    }

    /// Effective path prefix
    pub fn api_prefix(&self) -> &str {
        self.api_prefix
            .as_deref()
            .unwrap_or_else(|| self.profile.default_prefix())
    }
}

impl Default for StudentConfig {
    fn default() -> Self {
        Self { default_id: 1 }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            cgpa_scale: DEFAULT_CGPA_SCALE,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DashboardError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DashboardError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                log::debug!("Loading config from {}", config_path.display());
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config file location
    pub fn default_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("config.toml"))
    }

    /// Directory holding config and REPL history
    pub fn state_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(STATE_DIR_NAME))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let base = self.backend.base_url().trim();
        if base.is_empty() {
            return Err(DashboardError::ConfigError(
                "base_url must not be empty".to_string()
            ));
        }

        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(DashboardError::ConfigError(
                format!("base_url must start with http:// or https://: {}", base)
            ));
        }

        let prefix = self.backend.api_prefix();
        if !prefix.is_empty() && !prefix.starts_with('/') {
            return Err(DashboardError::ConfigError(
                format!("api_prefix must be empty or start with '/': {}", prefix)
            ));
        }

        if self.backend.timeout_secs == 0 {
            return Err(DashboardError::ConfigError(
                "timeout_secs must be greater than 0".to_string()
            ));
        }

        if !self.display.cgpa_scale.is_finite() || self.display.cgpa_scale <= 0.0 {
            return Err(DashboardError::ConfigError(
                format!("cgpa_scale must be a positive number: {}", self.display.cgpa_scale)
            ));
        }

        if self.student.default_id == 0 {
            return Err(DashboardError::ConfigError(
                "default_id must be greater than 0".to_string()
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| DashboardError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DashboardError::ConfigError(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DashboardError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Switch endpoint variant, resetting address and prefix to its defaults
    pub fn apply_profile(&mut self, profile: ApiProfile) {
        let timeout_secs = self.backend.timeout_secs;
        self.backend = BackendConfig::for_profile(profile);
        self.backend.timeout_secs = timeout_secs;
    }

    /// Resolved backend endpoints
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.backend.base_url(), self.backend.api_prefix())
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.profile, ApiProfile::Legacy);
        assert_eq!(config.backend.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.backend.api_prefix(), "");
        assert_eq!(config.student.default_id, 1);
        assert_eq!(config.display.cgpa_scale, 4.0);
    }

    #[test]
    fn test_config_validation_success() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let mut config = Config::default();
        config.backend.base_url = Some("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_scheme() {
        let mut config = Config::default();
        config.backend.base_url = Some("127.0.0.1:8000".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_prefix() {
        let mut config = Config::default();
        config.backend.api_prefix = Some("api".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_timeout() {
        let mut config = Config::default();
        config.backend.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_scale() {
        let mut config = Config::default();
        config.display.cgpa_scale = 0.0;
        assert!(config.validate().is_err());
        config.display.cgpa_scale = f64::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_student_id() {
        let mut config = Config::default();
        config.student.default_id = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_current_profile() {
        let mut config = Config::default();
        config.backend.timeout_secs = 10;
        config.apply_profile(ApiProfile::Current);

        assert_eq!(config.backend.api_prefix(), "/api");
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(
            config.endpoints().dashboard(1),
            "http://localhost:3000/api/dashboard/student/1"
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[student]\ndefault_id = 5\n",
        ).unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.student.default_id, 5);
        assert_eq!(config.backend, BackendConfig::default());
    }

    #[test]
    fn test_profile_alone_selects_current_routes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nprofile = \"current\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.backend.profile, ApiProfile::Current);
        assert_eq!(config.backend.timeout_secs, 30);
        assert_eq!(
            config.endpoints().dashboard(1),
            "http://localhost:3000/api/dashboard/student/1"
        );
    }

    #[test]
    fn test_explicit_address_overrides_profile() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[backend]\nprofile = \"current\"\nbase_url = \"https://advisor.example.edu\"\n",
        ).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(
            config.endpoints().ask(2),
            "https://advisor.example.edu/api/ask/2"
        );
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nprofile = \"legacy\"\nbase_url = \"\"\napi_prefix = \"\"\ntimeout_secs = 30\n").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(DashboardError::ConfigError(_))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.apply_profile(ApiProfile::Current);
        config.student.default_id = 3;
        config.save(&path).unwrap();

        let reloaded = Config::load_from_file(&path).unwrap();
        assert_eq!(reloaded, config);
    }
}
