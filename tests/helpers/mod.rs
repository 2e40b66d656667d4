#![allow(dead_code)]

pub mod mock_slack;
pub mod mock_topic;

use inspector_alerts::config::Config;
use inspector_alerts::core::{FindingEvent, Severity};

pub const SLACK_URL: &str = "https://hooks.slack.com/services/T000/B000/XXXX";
pub const TOPIC_ARN: &str = "arn:aws:sns:us-east-1:123456789012:inspector-findings";

/// Loads the sample finding and overrides its severity.
pub fn finding(severity: Severity) -> FindingEvent {
    let mut event: FindingEvent =
        serde_json::from_str(include_str!("../fixtures/finding.json")).unwrap();
    event.detail.severity = severity;
    event
}

/// A configuration with both outlets enabled and fully configured.
pub fn both_outlets(sev_list: Vec<Severity>) -> Config {
    Config {
        sev_list,
        enable_sns: true,
        sns_arn: Some(TOPIC_ARN.to_string()),
        enable_slack: true,
        slack_url: Some(SLACK_URL.to_string()),
        ..Default::default()
    }
}
