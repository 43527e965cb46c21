//! Configuration handling for the TUI

use crate::state::{SubmitPolicy, Toasts};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// JSON catalog to use instead of the built-in forms
    pub catalog_path: Option<PathBuf>,
    /// Whether empty required fields block submission
    pub submit_policy: Option<SubmitPolicy>,
    /// How long success toasts stay visible
    pub toast_ttl_ms: Option<u64>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "dynform", "dynform-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.submit_policy.unwrap_or_default()
    }

    pub fn toast_ttl(&self) -> Duration {
        self.toast_ttl_ms
            .map(Duration::from_millis)
            .unwrap_or(Toasts::DEFAULT_TTL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.policy(), SubmitPolicy::Strict);
        assert_eq!(config.toast_ttl(), Toasts::DEFAULT_TTL);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            catalog_path: Some(PathBuf::from("/tmp/forms.json")),
            submit_policy: Some(SubmitPolicy::Lenient),
            toast_ttl_ms: Some(1000),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.catalog_path, Some(PathBuf::from("/tmp/forms.json")));
        assert_eq!(parsed.policy(), SubmitPolicy::Lenient);
        assert_eq!(parsed.toast_ttl(), Duration::from_millis(1000));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.submit_policy.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"submit_policy": "lenient", "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.policy(), SubmitPolicy::Lenient);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        let json = r#"{"submit_policy": "sometimes"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = TuiConfig::load_from(Path::new("/nonexistent/dynform/config.json")).unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("dynform-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"toast_ttl_ms": 400}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.toast_ttl(), Duration::from_millis(400));
    }

    #[test]
    fn test_config_path_is_json_in_app_dir() {
        if let Some(path) = TuiConfig::config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
            assert!(path.to_string_lossy().contains("dynform"));
        }
    }
}
