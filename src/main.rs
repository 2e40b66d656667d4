//! inspector-alerts - Inspector finding relay
//!
//! Runs as an AWS Lambda function triggered by EventBridge, or dispatches a
//! single captured event with `--event`.

use anyhow::{Context, Result};
use clap::Parser;
use inspector_alerts::{
    cli::Cli,
    config::Config,
    core::{FindingEvent, TopicPublisher, WebhookClient},
    dispatcher::AlertDispatcher,
    handler::handle_event,
    logging,
    notification::{slack::SlackClient, sns::SnsPublisher},
};
use lambda_runtime::{service_fn, LambdaEvent};
use std::{path::Path, sync::Arc, time::Duration};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(&cli).context("failed to load configuration")?;

    logging::init(&config);

    let enabled = |flag: bool| if flag { "Enabled" } else { "Disabled" };
    info!(
        sev_list = ?config.sev_list,
        sns = enabled(config.enable_sns),
        slack = enabled(config.enable_slack),
        xray = config.enable_xray,
        "Configuration loaded"
    );

    let webhook: Arc<dyn WebhookClient> = Arc::new(SlackClient::new(Duration::from_secs(
        config.slack_timeout_seconds,
    ))?);
    let topic: Arc<dyn TopicPublisher> = Arc::new(SnsPublisher::from_env().await);
    let dispatcher = Arc::new(AlertDispatcher::new(config, webhook, topic));

    match &cli.event {
        Some(path) => replay(&dispatcher, path).await,
        None => {
            lambda_runtime::run(service_fn(move |event: LambdaEvent<FindingEvent>| {
                let dispatcher = dispatcher.clone();
                async move { handle_event(&dispatcher, event).await }
            }))
            .await
            .map_err(|e| anyhow::anyhow!("Lambda runtime failed: {}", e))
        }
    }
}

/// Dispatches one finding read from `path` and prints the status.
async fn replay(dispatcher: &AlertDispatcher, path: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read event file {}", path.display()))?;
    let event: FindingEvent = serde_json::from_str(&raw)
        .with_context(|| format!("invalid finding event in {}", path.display()))?;

    info!(path = %path.display(), "Replaying finding event");
    let status = dispatcher.dispatch(&event).await?;
    println!("{}", serde_json::to_string(&status)?);
    Ok(())
}
