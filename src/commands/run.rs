//! The `run` command: one poll-and-notify pass

use crate::classroom::ClassroomClient;
use crate::config::Config;
use crate::discord::DiscordWebhook;
use crate::error::Result;
use crate::orchestrator::{Orchestrator, RunSummary};
use crate::pacing::Pacing;
use crate::watermark::WatermarkStore;

/// Execute one full run over all visible courses
///
/// # Arguments
///
/// * `config` - validated configuration
/// * `state_path` - optional override for the watermark database location
/// * `dry_run` - detect new items but do not send or advance watermarks
pub async fn run(config: Config, state_path: Option<String>, dry_run: bool) -> Result<RunSummary> {
    let store = match state_path {
        Some(path) => WatermarkStore::open(path)?,
        None => WatermarkStore::open_default()?,
    };

    let source = ClassroomClient::new(
        config.classroom.api_base.clone(),
        config.classroom.access_token.clone(),
        config.classroom.page_size,
    );
    let sink = DiscordWebhook::new(config.webhook.url.clone());
    let pacing = Pacing::from_config(&config.pacing);

    let orchestrator = Orchestrator::new(
        source,
        sink,
        store,
        config.courses.excluded.clone(),
        pacing,
    )
    .with_dry_run(dry_run);

    orchestrator.run().await
}
