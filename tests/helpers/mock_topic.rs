//! A mock topic publisher for testing dispatch.

use async_trait::async_trait;
use inspector_alerts::core::{TopicMessage, TopicPublisher};
use inspector_alerts::notification::PublishError;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
pub struct MockTopicPublisher {
    pub published: Arc<Mutex<Vec<TopicMessage>>>,
    pub error: Option<PublishError>,
}

impl MockTopicPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(error: PublishError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn get_published(&self) -> Vec<TopicMessage> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl TopicPublisher for MockTopicPublisher {
    async fn publish(&self, message: &TopicMessage) -> Result<(), PublishError> {
        self.published.lock().unwrap().push(message.clone());
        match &self.error {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }
}
