//! Classcord - Google Classroom to Discord notification bridge
//!
//! Main entry point. An external scheduler (cron, systemd timer) is
//! expected to invoke `classcord run` periodically; each invocation is one
//! sequential pass over all visible courses.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use classcord::cli::{Cli, Commands};
use classcord::commands;
use classcord::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { dry_run } => {
            tracing::info!("Starting notification run");
            if dry_run {
                tracing::info!("Dry run: nothing will be sent or persisted");
            }

            // Load and validate configuration
            let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
            let config = Config::load(config_path)?;
            config.validate()?;

            commands::run::run(config, cli.state_path, dry_run).await?;
            Ok(())
        }
        Commands::Reset => {
            tracing::info!("Resetting notification history");
            commands::reset::reset(cli.state_path)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "classcord=debug"
    } else {
        "classcord=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
