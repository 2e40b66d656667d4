//! A client for posting findings to a Slack incoming webhook.

use crate::core::WebhookClient;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, instrument};

/// A client for sending messages to a Slack webhook.
pub struct SlackClient {
    http: reqwest::Client,
}

impl SlackClient {
    /// Creates a new `SlackClient` whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build Slack HTTP client")?;
        Ok(Self { http })
    }
}

#[async_trait]
impl WebhookClient for SlackClient {
    #[instrument(skip_all)]
    async fn post(&self, url: &str, payload: &Value) -> anyhow::Result<()> {
        let response = self.http.post(url).json(payload).send().await;

        match response {
            Ok(res) => {
                if res.status().is_success() {
                    info!("Successfully sent finding to Slack.");
                    Ok(())
                } else {
                    let status = res.status();
                    let text = res.text().await.unwrap_or_default();
                    error!(
                        status = %status,
                        body = %text,
                        "Failed to send Slack notification"
                    );
                    anyhow::bail!(
                        "Failed to send Slack notification: status {}, body: {}",
                        status,
                        text
                    );
                }
            }
            Err(e) => {
                error!(error = %e, "HTTP request to Slack failed");
                Err(e.into())
            }
        }
    }
}
