//! Publishes findings to an SNS topic.

use crate::core::{TopicMessage, TopicPublisher};
use crate::notification::PublishError;
use async_trait::async_trait;
use aws_sdk_sns::error::{DisplayErrorContext, SdkError};
use tracing::{error, info, instrument};

/// An SNS client bound to the function's AWS credentials and region.
pub struct SnsPublisher {
    client: aws_sdk_sns::Client,
}

impl SnsPublisher {
    pub fn new(client: aws_sdk_sns::Client) -> Self {
        Self { client }
    }

    /// Builds a publisher from the standard AWS provider chain
    /// (`AWS_REGION`, the execution role, ...).
    pub async fn from_env() -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self::new(aws_sdk_sns::Client::new(&sdk_config))
    }
}

#[async_trait]
impl TopicPublisher for SnsPublisher {
    #[instrument(skip_all, fields(topic = %message.topic_arn))]
    async fn publish(&self, message: &TopicMessage) -> Result<(), PublishError> {
        let result = self
            .client
            .publish()
            .topic_arn(&message.topic_arn)
            .subject(&message.subject)
            .message(&message.message)
            .message_structure("json")
            .send()
            .await;

        match result {
            Ok(output) => {
                info!(
                    message_id = output.message_id().unwrap_or_default(),
                    "Published finding to SNS."
                );
                Ok(())
            }
            Err(SdkError::ConstructionFailure(e)) => {
                error!(error = ?e, "SNS publish request could not be built");
                Err(PublishError::InvalidParameters(format!("{:?}", e)))
            }
            Err(e) => {
                let detail = DisplayErrorContext(&e).to_string();
                error!(error = %detail, "SNS publish failed");
                Err(PublishError::Client(detail))
            }
        }
    }
}
