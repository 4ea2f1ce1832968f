//! Configuration management for Classcord
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from a YAML file with environment variable overrides.

use crate::error::{ClasscordError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure for Classcord
///
/// Holds everything a run needs: the webhook sink, the Classroom source,
/// the course exclusion list, and the pacing delays.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Discord webhook sink configuration
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Google Classroom source configuration
    #[serde(default)]
    pub classroom: ClassroomConfig,

    /// Course selection configuration
    #[serde(default)]
    pub courses: CoursesConfig,

    /// Pacing delays between external calls
    #[serde(default)]
    pub pacing: PacingConfig,
}

/// Discord webhook configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WebhookConfig {
    /// Webhook endpoint URL for the target channel
    #[serde(default)]
    pub url: String,
}

/// Google Classroom API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomConfig {
    /// API base URL (useful for tests and local mocks)
    ///
    /// When set to something other than the default, all Classroom endpoints
    /// (`/v1/courses`, `/v1/courses/{id}/announcements`, ...) are built on
    /// this base, which allows tests to point the client at a mock server.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// OAuth bearer token used for source API calls
    ///
    /// Obtaining and refreshing the token is out of scope; the client only
    /// attaches it. Usually supplied via `CLASSCORD_ACCESS_TOKEN`.
    #[serde(default)]
    pub access_token: String,

    /// Page size for announcement/coursework feed fetches
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_api_base() -> String {
    "https://classroom.googleapis.com".to_string()
}

fn default_page_size() -> u32 {
    10
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            access_token: String::new(),
            page_size: default_page_size(),
        }
    }
}

/// Course selection configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoursesConfig {
    /// Course ids that are never fetched or notified
    #[serde(default)]
    pub excluded: Vec<String>,
}

/// Pacing delays between consecutive external calls
///
/// Both the webhook and the Classroom API apply rate limits; these delays
/// keep a run under them. Tests run with zero delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacingConfig {
    /// Delay between consecutive webhook sends, in milliseconds
    #[serde(default = "default_send_delay_ms")]
    pub send_delay_ms: u64,

    /// Delay between courses, in milliseconds
    #[serde(default = "default_course_delay_ms")]
    pub course_delay_ms: u64,
}

fn default_send_delay_ms() -> u64 {
    500
}

fn default_course_delay_ms() -> u64 {
    1000
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: default_send_delay_ms(),
            course_delay_ms: default_course_delay_ms(),
        }
    }
}

impl PacingConfig {
    /// Delay between consecutive webhook sends
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    /// Delay between courses
    pub fn course_delay(&self) -> Duration {
        Duration::from_millis(self.course_delay_ms)
    }
}

impl Config {
    /// Load configuration from a YAML file, applying environment overrides
    ///
    /// A missing file yields the default configuration so that a run can be
    /// driven entirely by environment variables.
    ///
    /// # Environment overrides
    ///
    /// * `CLASSCORD_WEBHOOK_URL` - webhook endpoint
    /// * `CLASSCORD_ACCESS_TOKEN` - Classroom bearer token
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let mut config: Config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                ClasscordError::Config(format!("failed to read {}: {}", path.display(), e))
            })?;
            serde_yaml::from_str(&contents).map_err(|e| {
                ClasscordError::Config(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            Config::default()
        };

        if let Ok(url) = std::env::var("CLASSCORD_WEBHOOK_URL") {
            config.webhook.url = url;
        }
        if let Ok(token) = std::env::var("CLASSCORD_ACCESS_TOKEN") {
            config.classroom.access_token = token;
        }

        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the webhook URL is missing or not an
    /// absolute http(s) URL, or when the page size is zero.
    pub fn validate(&self) -> Result<()> {
        if self.webhook.url.is_empty() {
            return Err(ClasscordError::Config(
                "webhook.url is required (or set CLASSCORD_WEBHOOK_URL)".to_string(),
            )
            .into());
        }

        let parsed = url::Url::parse(&self.webhook.url)
            .map_err(|e| ClasscordError::Config(format!("webhook.url is invalid: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClasscordError::Config(format!(
                "webhook.url must be http or https, got {}",
                parsed.scheme()
            ))
            .into());
        }

        url::Url::parse(&self.classroom.api_base)
            .map_err(|e| ClasscordError::Config(format!("classroom.api_base is invalid: {}", e)))?;

        if self.classroom.page_size == 0 {
            return Err(
                ClasscordError::Config("classroom.page_size must be at least 1".to_string()).into(),
            );
        }

        Ok(())
    }
}
