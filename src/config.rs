//! Configuration handling for the course form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default course-create endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/course/create";

/// Default upper bound for one submission, videos included
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable overriding the endpoint
const ENDPOINT_ENV: &str = "COURSE_FORM_ENDPOINT";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Course-create endpoint URL
    pub endpoint: Option<String>,
    /// Request timeout in seconds, 0 disables it
    pub request_timeout_secs: Option<u64>,
    /// Log file path
    pub log_file: Option<PathBuf>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "courseform", "course-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                config.endpoint = Some(endpoint);
            }
        }
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Where logs go: the configured file or `course-form.log` in the data dir
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("course-form.log"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.log_file.is_none());
        assert_eq!(config.endpoint(), "http://localhost:5000/course/create");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(300)));
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            endpoint: Some("https://courses.example.com/course/create".to_string()),
            request_timeout_secs: Some(60),
            log_file: Some(PathBuf::from("/tmp/course-form.log")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.endpoint(), "https://courses.example.com/course/create");
        assert_eq!(parsed.request_timeout(), Some(Duration::from_secs(60)));
        assert_eq!(parsed.log_path(), Some(PathBuf::from("/tmp/course-form.log")));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = FormConfig {
            request_timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"endpoint": "http://x/course/create", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.endpoint(), "http://x/course/create");
    }

    #[test]
    fn test_load_returns_ok() {
        // Depends on the machine's config dir; only checks that loading never fails hard
        let result = FormConfig::load();
        assert!(result.is_ok());
    }
}
