//! A mock webhook client for testing dispatch.

use async_trait::async_trait;
use inspector_alerts::core::WebhookClient;
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, Default)]
pub struct MockSlackClient {
    pub posts: Arc<Mutex<Vec<(String, Value)>>>,
    pub fail: bool,
}

impl MockSlackClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn get_posts(&self) -> Vec<(String, Value)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookClient for MockSlackClient {
    async fn post(&self, url: &str, payload: &Value) -> anyhow::Result<()> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        if self.fail {
            anyhow::bail!("Failed to send Slack notification: status 500");
        }
        Ok(())
    }
}
