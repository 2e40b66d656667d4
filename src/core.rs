//! Core domain types and outlet traits for inspector-alerts
//!
//! This module defines the inbound finding event, the severity scale, and the
//! trait contracts the dispatcher uses to reach its notification outlets.

use crate::notification::PublishError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

/// An Inspector finding as delivered by the EventBridge trigger.
///
/// Only the fields the formatters read are modelled; everything else in the
/// envelope is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FindingEvent {
    /// Event time, rendered verbatim in notifications
    pub time: String,
    /// The finding itself
    pub detail: FindingDetail,
}

/// The `detail` section of a finding event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindingDetail {
    pub severity: Severity,
    pub aws_account_id: String,
    /// Finding type, e.g. `PACKAGE_VULNERABILITY`
    #[serde(rename = "type")]
    pub finding_type: String,
    pub title: String,
    pub package_vulnerability_details: PackageVulnerabilityDetails,
    /// Affected resources, in the order the finding lists them
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageVulnerabilityDetails {
    /// Advisory link for the vulnerability
    pub source_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
}

impl FindingEvent {
    /// Returns the affected resource ids in finding order.
    pub fn resource_ids(&self) -> Vec<&str> {
        self.detail.resources.iter().map(|r| r.id.as_str()).collect()
    }
}

/// Finding severity as reported by Inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
pub enum Severity {
    Informational,
    Low,
    Medium,
    High,
    Critical,
    Untriaged,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Informational => "INFORMATIONAL",
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
            Severity::Untriaged => "UNTRIAGED",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INFORMATIONAL" => Ok(Severity::Informational),
            "LOW" => Ok(Severity::Low),
            "MEDIUM" => Ok(Severity::Medium),
            "HIGH" => Ok(Severity::High),
            "CRITICAL" => Ok(Severity::Critical),
            "UNTRIAGED" => Ok(Severity::Untriaged),
            other => Err(format!("unknown severity '{}'", other)),
        }
    }
}

/// A notification destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlet {
    /// Slack incoming webhook
    Webhook,
    /// SNS topic
    Topic,
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outlet::Webhook => f.write_str("slack"),
            Outlet::Topic => f.write_str("sns"),
        }
    }
}

/// The status returned to the trigger after every successful invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchStatus {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl DispatchStatus {
    pub fn ok() -> Self {
        Self { status_code: 200 }
    }
}

/// A publish request for a pub/sub topic.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicMessage {
    pub topic_arn: String,
    pub subject: String,
    /// JSON document keyed by protocol, sent with `MessageStructure=json`
    pub message: String,
}

// =============================================================================
// Outlet Traits
// =============================================================================

/// Posts a JSON body to a chat webhook.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Sends `payload` to `url`.
    ///
    /// # Returns
    /// * `Ok(())` if the webhook accepted the request
    /// * `Err` on transport failure or a non-success status
    async fn post(&self, url: &str, payload: &Value) -> anyhow::Result<()>;
}

/// Publishes a message to a pub/sub topic.
#[async_trait]
pub trait TopicPublisher: Send + Sync {
    async fn publish(&self, message: &TopicMessage) -> Result<(), PublishError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_event_parses_eventbridge_envelope() {
        let raw = r#"{
            "version": "0",
            "id": "6a7e8feb-b491-4cf7-a9f1-bf3703467718",
            "detail-type": "Inspector2 Finding",
            "source": "aws.inspector2",
            "time": "2024-05-01T12:00:00Z",
            "detail": {
                "awsAccountId": "123456789012",
                "severity": "HIGH",
                "type": "PACKAGE_VULNERABILITY",
                "title": "CVE-2024-0001 - openssl",
                "status": "ACTIVE",
                "packageVulnerabilityDetails": {
                    "sourceUrl": "https://nvd.nist.gov/vuln/detail/CVE-2024-0001",
                    "vulnerabilityId": "CVE-2024-0001"
                },
                "resources": [{"id": "i-1", "type": "AWS_EC2_INSTANCE"}, {"id": "i-2"}]
            }
        }"#;

        let event: FindingEvent = serde_json::from_str(raw).unwrap();

        assert_eq!(event.time, "2024-05-01T12:00:00Z");
        assert_eq!(event.detail.severity, Severity::High);
        assert_eq!(event.detail.finding_type, "PACKAGE_VULNERABILITY");
        assert_eq!(event.resource_ids(), vec!["i-1", "i-2"]);
    }

    #[test]
    fn test_finding_event_missing_required_field_is_rejected() {
        let raw = r#"{
            "time": "2024-05-01T12:00:00Z",
            "detail": {
                "awsAccountId": "123456789012",
                "severity": "HIGH",
                "type": "NETWORK_REACHABILITY",
                "title": "Port 22 is reachable",
                "resources": []
            }
        }"#;

        assert!(serde_json::from_str::<FindingEvent>(raw).is_err());
    }

    #[test]
    fn test_severity_parsing_is_case_insensitive() {
        assert_eq!("critical".parse::<Severity>(), Ok(Severity::Critical));
        assert_eq!(" High ".parse::<Severity>(), Ok(Severity::High));
        assert!("SEVERE".parse::<Severity>().is_err());
    }

    #[test]
    fn test_dispatch_status_serializes_as_status_code() {
        let json = serde_json::to_value(DispatchStatus::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "statusCode": 200 }));
    }
}
