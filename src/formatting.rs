// src/formatting.rs

use crate::core::{FindingEvent, Severity};
use serde::Serialize;
use serde_json::{json, Value};

/// Builds the Slack webhook body for a finding.
///
/// Slack receives the block array JSON-encoded as a string under `blocks`.
pub fn slack_payload(event: &FindingEvent) -> serde_json::Result<Value> {
    let blocks = serde_json::to_string(&slack_blocks(event))?;
    Ok(json!({ "blocks": blocks }))
}

/// Builds the single section block describing a finding.
pub fn slack_blocks(event: &FindingEvent) -> Value {
    let detail = &event.detail;
    let headline = format!(
        "{} {}: {}",
        severity_marker(detail.severity),
        detail.severity,
        detail.title
    );

    json!([
        {
            "type": "section",
            "text": mrkdwn(headline),
            "fields": [
                mrkdwn(format!("*AWS Account:*\n{}", detail.aws_account_id)),
                mrkdwn(format!("*Time:*\n{}", event.time)),
                mrkdwn(format!("*Finding Type:*\n{}", humanize_finding_type(&detail.finding_type))),
                mrkdwn(format!("*Finding Info:*\n{}", detail.package_vulnerability_details.source_url)),
                mrkdwn(format!("*Resources:*\n`{}`", event.resource_ids().join(","))),
            ]
        }
    ])
}

fn mrkdwn(text: String) -> Value {
    json!({ "type": "mrkdwn", "text": text })
}

/// The Slack emoji that leads a finding's headline.
pub fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => ":red_circle:",
        Severity::High => ":large_orange_circle:",
        _ => ":large_green_circle:",
    }
}

/// `PACKAGE_VULNERABILITY` -> `package vulnerability`
pub fn humanize_finding_type(finding_type: &str) -> String {
    finding_type.to_lowercase().replace('_', " ")
}

#[derive(Serialize)]
struct TopicBody<'a> {
    #[serde(rename = "AWS_ACCOUNT")]
    aws_account: &'a str,
    #[serde(rename = "SEVERITY")]
    severity: Severity,
    #[serde(rename = "TIME")]
    time: &'a str,
    #[serde(rename = "FINDING_TYPE")]
    finding_type: &'a str,
    #[serde(rename = "FINDING")]
    finding: &'a str,
    #[serde(rename = "FINDING_INFO")]
    finding_info: &'a str,
    #[serde(rename = "RESOURCES")]
    resources: Vec<&'a str>,
}

/// Builds the SNS message document.
///
/// With `MessageStructure=json` SNS expects a JSON object keyed by protocol;
/// only `default` is set, holding the finding as a JSON string.
pub fn topic_message(event: &FindingEvent) -> serde_json::Result<String> {
    let detail = &event.detail;
    let body = TopicBody {
        aws_account: &detail.aws_account_id,
        severity: detail.severity,
        time: &event.time,
        finding_type: &detail.finding_type,
        finding: &detail.title,
        finding_info: &detail.package_vulnerability_details.source_url,
        resources: event.resource_ids(),
    };
    let default = serde_json::to_string(&body)?;
    serde_json::to_string(&json!({ "default": default }))
}

/// `"<SEVERITY>: <title>"`
pub fn topic_subject(event: &FindingEvent) -> String {
    format!("{}: {}", event.detail.severity, event.detail.title)
}
