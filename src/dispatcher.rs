//! Severity filtering and fan-out of a finding to the enabled outlets.

use crate::config::Config;
use crate::core::{DispatchStatus, FindingEvent, Outlet, TopicMessage, TopicPublisher, WebhookClient};
use crate::formatting;
use crate::notification::PublishError;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Errors that fail an invocation.
///
/// Only the topic outlet produces these; webhook failures are logged and
/// never surface to the trigger.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("{0} destination not configured")]
    MissingDestination(Outlet),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("failed to encode {0} payload: {1}")]
    Encode(Outlet, #[source] serde_json::Error),
}

/// Relays finding events to Slack and SNS.
pub struct AlertDispatcher {
    config: Config,
    webhook: Arc<dyn WebhookClient>,
    topic: Arc<dyn TopicPublisher>,
}

impl AlertDispatcher {
    pub fn new(
        config: Config,
        webhook: Arc<dyn WebhookClient>,
        topic: Arc<dyn TopicPublisher>,
    ) -> Self {
        Self {
            config,
            webhook,
            topic,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sends `event` to every enabled outlet if its severity is allow-listed.
    ///
    /// Every enabled outlet is attempted. A topic failure is returned after
    /// the webhook has had its turn.
    #[instrument(skip_all, fields(severity = %event.detail.severity))]
    pub async fn dispatch(&self, event: &FindingEvent) -> Result<DispatchStatus, DispatchError> {
        if !self.config.should_notify(event.detail.severity) {
            debug!("Severity not in allow-list, skipping notification");
            return Ok(DispatchStatus::ok());
        }

        let mut failure = None;

        if self.config.enable_sns {
            debug!("Sending SNS Message");
            if let Err(e) = self.send_topic(event).await {
                failure = Some(e);
            }
        }

        if self.config.enable_slack {
            debug!("Sending Slack Message");
            self.send_webhook(event).await;
        }

        match failure {
            Some(e) => Err(e),
            None => Ok(DispatchStatus::ok()),
        }
    }

    async fn send_topic(&self, event: &FindingEvent) -> Result<(), DispatchError> {
        let Some(topic_arn) = self.config.sns_arn.as_deref() else {
            error!("SNS ARN not provided");
            return Err(DispatchError::MissingDestination(Outlet::Topic));
        };

        let message = TopicMessage {
            topic_arn: topic_arn.to_string(),
            subject: formatting::topic_subject(event),
            message: formatting::topic_message(event)
                .map_err(|e| DispatchError::Encode(Outlet::Topic, e))?,
        };

        self.topic.publish(&message).await.map_err(|e| {
            error!(error = %e, "Failed to publish finding to SNS");
            DispatchError::from(e)
        })
    }

    async fn send_webhook(&self, event: &FindingEvent) {
        let Some(url) = self.config.slack_url.as_deref() else {
            error!("Slack URL not provided");
            return;
        };

        let payload = match formatting::slack_payload(event) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Failed to encode Slack payload");
                return;
            }
        };

        if let Err(e) = self.webhook.post(url, &payload).await {
            error!(error = %e, "Failed to send finding to Slack");
        }
    }
}
