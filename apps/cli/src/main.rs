//! Playlift entry point.

mod args;
mod file_config;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use playlift_publisher::HttpPublisher;
use playlift_release::{AppConfig, Promoter, Publisher};

use crate::args::{Cli, Command};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Publish(publish_args) => {
            let config = file_config::resolve_publish(&cli.config, &publish_args)?;
            let api = build_api(&config.app)?;

            let outcome = Publisher::new(&api).publish(&config).await.with_context(|| {
                format!(
                    "failed to upload APK to the \"{}\" track of {}",
                    config.track, config.app.package_name
                )
            })?;

            tracing::info!(
                version_code = outcome.version_code,
                track = %outcome.track.track,
                edit_id = %outcome.edit_id,
                "publish complete"
            );
        }
        Command::Promote(promote_args) => {
            let config = file_config::resolve_promote(&cli.config, &promote_args)?;
            let api = build_api(&config.app)?;

            let outcome = Promoter::new(&api).promote(&config).await.with_context(|| {
                format!(
                    "failed to promote from the \"{}\" track to \"{}\" for {}",
                    config.track, config.promote_track, config.app.package_name
                )
            })?;

            tracing::info!(
                version_code = outcome.version_code,
                from = %outcome.source.track,
                to = %outcome.destination.track,
                edit_id = %outcome.edit_id,
                "promotion complete"
            );
        }
    }

    Ok(())
}

fn build_api(app: &AppConfig) -> anyhow::Result<HttpPublisher> {
    let api = match &app.base_url {
        Some(base_url) => HttpPublisher::with_base_url(
            app.access_token.clone(),
            &app.application_name,
            base_url.clone(),
        ),
        None => HttpPublisher::new(app.access_token.clone(), &app.application_name),
    };
    api.context("failed to build publisher API client")
}
