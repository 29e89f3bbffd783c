//! Application configuration management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::network::{get_user_agent, DEFAULT_TIMEOUT};
use crate::utils::validation::{is_http_url, validate_url};

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
/// Environment variable overriding the API base URL
pub const API_BASE_URL_ENV: &str = "YT_COMMENTS_API_BASE_URL";
/// Environment variable overriding the CSV output path
pub const OUTPUT_PATH_ENV: &str = "YT_COMMENTS_OUTPUT";

/// Upper bound the comment-listing endpoint accepts for `maxResults`
pub const MAX_RESULTS_LIMIT: u32 = 100;

/// Main application configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

/// Comment API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Never written back to disk, normally supplied through `YOUTUBE_API_KEY`
    #[serde(skip_serializing)]
    pub api_key: String,
    pub base_url: String,
    pub max_results: u32,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// CSV export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_path: PathBuf,
}

/// Terminal front end settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub title: String,
    /// Rows shown per page of the comment table
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            export: ExportConfig::default(),
            ui: UiConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://www.googleapis.com/youtube/v3".to_string(),
            max_results: MAX_RESULTS_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            user_agent: get_user_agent().to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("comments.csv"),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "YouTube Channel Comments Fetcher".to_string(),
            page_size: 25,
        }
    }
}

impl AppConfig {
    /// Load configuration from the platform config file (if any), then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            tracing::debug!("No config file at {:?}, using defaults", config_path);
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: AppConfig =
            serde_json::from_str(&content).with_context(|| "Failed to parse config file")?;

        tracing::info!("Loaded configuration from: {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file. The API key is not persisted.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }
        }

        let content =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        tracing::info!("Saved configuration to: {:?}", path);
        Ok(())
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "ytcomments", "fetcher")
            .with_context(|| "Failed to get project directories")?;

        Ok(project_dirs.config_dir().join("config.json"))
    }

    /// Apply overrides from a key lookup (the process environment in practice)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.api.api_key = key.trim().to_string();
        }
        if let Some(base_url) = lookup(API_BASE_URL_ENV) {
            self.api.base_url = base_url.trim().to_string();
        }
        if let Some(output) = lookup(OUTPUT_PATH_ENV) {
            self.export.output_path = PathBuf::from(output);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.api.api_key.is_empty() {
            anyhow::bail!("{} is not set", API_KEY_ENV);
        }

        validate_url(&self.api.base_url).with_context(|| "Invalid API base URL")?;
        if !is_http_url(&self.api.base_url) {
            anyhow::bail!("API base URL must use http or https");
        }

        if self.api.max_results == 0 || self.api.max_results > MAX_RESULTS_LIMIT {
            anyhow::bail!(
                "Max results should be between 1 and {}",
                MAX_RESULTS_LIMIT
            );
        }

        if self.api.timeout_seconds == 0 || self.api.timeout_seconds > 300 {
            anyhow::bail!("Timeout should be between 1 and 300 seconds");
        }

        if self.export.output_path.as_os_str().is_empty() {
            anyhow::bail!("Output path must not be empty");
        }

        if self.ui.page_size == 0 {
            anyhow::bail!("Page size must be greater than 0");
        }

        if !["error", "warn", "info", "debug", "trace"].contains(&self.log_level.as_str()) {
            anyhow::bail!("Invalid log level: {}", self.log_level);
        }

        Ok(())
    }
}
