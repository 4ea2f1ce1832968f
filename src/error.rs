//! Error types for Classcord
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Classcord operations
///
/// This enum encompasses all possible errors that can occur while polling
/// the Classroom source, persisting watermarks, and delivering notifications
/// to the Discord sink.
#[derive(Error, Debug)]
pub enum ClasscordError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Feed fetch errors (source unreachable, unauthorized, quota)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Course enumeration errors (course listing call failed)
    #[error("Enumeration error: {0}")]
    Enumeration(String),

    /// Notification send errors (sink unreachable or rejected the payload)
    #[error("Send error: {0}")]
    Send(String),

    /// Watermark storage errors (database operations)
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Embedded database errors
    #[error("Database error: {0}")]
    Sled(#[from] sled::Error),
}

/// Result type alias for Classcord operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
