use anyhow::{Context, Result};
use clap::Parser;
use resume_ui::app_log;
use resume_ui::cli::{handle_command, Cli};
use resume_ui::core::ConfigManager;
use std::fs::OpenOptions;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load(cli.config.as_deref())?;
    config.ensure_directories().await?;

    // Clear file on startup
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&config.environment.log_path)
        .with_context(|| {
            format!(
                "Failed to open log file {}",
                config.environment.log_path.display()
            )
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Invalid log directive")?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();

    app_log!(info, "Starting RealiZe resume analysis client");
    app_log!(info, "Environment: {}", config.environment_name);
    app_log!(info, "API: {}", config.service.api_base_url);
    app_log!(info, "Data: {}", config.environment.data_dir.display());
    app_log!(info, "Output: {}", config.environment.output_dir.display());

    handle_command(cli, &config).await
}
