//! Injectable pacing policy
//!
//! The webhook and the Classroom API both rate limit; production runs pause
//! between sends and between courses. Tests construct [`Pacing::none`] so
//! nothing sleeps.

use crate::config::PacingConfig;
use std::time::Duration;

/// Delays inserted between external calls
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    send_delay: Duration,
    course_delay: Duration,
}

impl Pacing {
    /// Pacing from configuration
    pub fn from_config(config: &PacingConfig) -> Self {
        Self {
            send_delay: config.send_delay(),
            course_delay: config.course_delay(),
        }
    }

    /// Zero delays, for tests
    pub fn none() -> Self {
        Self {
            send_delay: Duration::ZERO,
            course_delay: Duration::ZERO,
        }
    }

    /// Pause between consecutive webhook sends
    pub async fn between_sends(&self) {
        if !self.send_delay.is_zero() {
            tokio::time::sleep(self.send_delay).await;
        }
    }

    /// Pause between courses
    pub async fn between_courses(&self) {
        if !self.course_delay.is_zero() {
            tokio::time::sleep(self.course_delay).await;
        }
    }
}
