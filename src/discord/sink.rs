//! Discord webhook sink and the paced delivery loop

use crate::discord::payload::WebhookPayload;
use crate::error::{ClasscordError, Result};
use crate::pacing::Pacing;
use crate::pipeline::record::NotificationRecord;
use async_trait::async_trait;

/// Write access to the notification sink
///
/// One call per notification; implementations report success or failure and
/// nothing else. The delivery loop owns pacing and failure isolation.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Send a single rendered notification to the sink
    async fn send(&self, payload: &WebhookPayload) -> Result<()>;
}

/// reqwest-backed Discord webhook client
pub struct DiscordWebhook {
    http: reqwest::Client,
    url: String,
}

impl DiscordWebhook {
    /// Create a webhook client for the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhook {
    async fn send(&self, payload: &WebhookPayload) -> Result<()> {
        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| ClasscordError::Send(format!("webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClasscordError::Send(format!("webhook returned {}", status)).into());
        }
        Ok(())
    }
}

/// Outcome counts of one delivery pass, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Notifications the sink accepted
    pub sent: usize,
    /// Notifications that failed and were skipped
    pub failed: usize,
}

/// Deliver a merged sequence of records to the sink
///
/// Each record is sent in order with the configured pacing delay between
/// consecutive sends. A failed send is logged and does not stop the
/// remaining records.
pub async fn deliver_all(
    sink: &dyn NotificationSink,
    records: &[NotificationRecord],
    pacing: &Pacing,
) -> DeliveryReport {
    let mut report = DeliveryReport::default();

    for (index, record) in records.iter().enumerate() {
        if index > 0 {
            pacing.between_sends().await;
        }

        match sink.send(&record.payload).await {
            Ok(()) => {
                tracing::info!(
                    "Sent {} notification for course {}",
                    record.kind,
                    record.course_id
                );
                report.sent += 1;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to send {} notification for course {}: {}",
                    record.kind,
                    record.course_id,
                    e
                );
                report.failed += 1;
            }
        }
    }

    report
}
