//! Classcord - Google Classroom to Discord notification bridge
//!
//! This library polls Google Classroom for new announcements and coursework
//! and relays them to a Discord webhook, tracking per-(course, feed)
//! watermarks so previously delivered items are not re-sent across runs.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `classroom`: Classroom API wire types and the source client
//! - `discord`: webhook payload types and the delivery sink
//! - `pipeline`: change detection, normalization, and cross-feed merging
//! - `watermark`: persisted per-(course, feed) watermark store
//! - `orchestrator`: per-course pipeline driver with failure isolation
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition

pub mod classroom;
pub mod cli;
pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod orchestrator;
pub mod pacing;
pub mod pipeline;
pub mod watermark;

// Re-export commonly used types
pub use classroom::{ClassroomClient, ClassroomSource};
pub use config::Config;
pub use discord::{DiscordWebhook, NotificationSink};
pub use error::{ClasscordError, Result};
pub use orchestrator::{Orchestrator, RunSummary};
pub use pacing::Pacing;
pub use pipeline::{FeedKind, NotificationRecord};
pub use watermark::WatermarkStore;
