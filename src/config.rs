//! Configuration management for inspector-alerts
//!
//! This module defines the `Config` struct holding the severity allow-list and
//! the per-outlet settings. It uses the `figment` crate to layer defaults, an
//! optional TOML file, the function's environment variables and CLI flags.

use crate::cli::Cli;
use crate::core::Severity;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Environment variables recognised by the loader.
const ENV_KEYS: &[&str] = &[
    "SEV_LIST",
    "ENABLE_SNS",
    "SNS_ARN",
    "ENABLE_SLACK",
    "SLACK_URL",
    "SLACK_TIMEOUT_SECONDS",
    "ENABLE_XRAY",
    "LOG_LEVEL",
];

/// The main configuration struct for the function.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Severities that trigger a notification.
    #[serde(deserialize_with = "deserialize_severity_list")]
    pub sev_list: Vec<Severity>,
    /// Publish findings to the SNS topic.
    pub enable_sns: bool,
    /// ARN of the SNS topic.
    pub sns_arn: Option<String>,
    /// Post findings to the Slack webhook.
    pub enable_slack: bool,
    /// The Slack incoming webhook URL.
    pub slack_url: Option<String>,
    /// Request timeout for the Slack webhook.
    pub slack_timeout_seconds: u64,
    /// Emit span timings for each invocation.
    pub enable_xray: bool,
    /// The logging level for the function.
    pub log_level: String,
}

impl Config {
    /// Loads the configuration, layering defaults, the optional TOML file,
    /// the environment and finally command-line flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        if let Some(path) = &cli.config {
            figment = figment.merge(Toml::file(path));
        }
        let config: Config = figment
            .merge(Env::raw().only(ENV_KEYS))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }

    /// Returns true if findings of `severity` should be relayed.
    pub fn should_notify(&self, severity: Severity) -> bool {
        self.sev_list.contains(&severity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sev_list: Vec::new(),
            enable_sns: false,
            sns_arn: None,
            enable_slack: false,
            slack_url: None,
            slack_timeout_seconds: 10,
            enable_xray: false,
            log_level: "info".to_string(),
        }
    }
}

/// Accepts either a comma-separated string (`HIGH,CRITICAL`, as set in the
/// function environment) or a list of severities (TOML).
fn deserialize_severity_list<'de, D>(deserializer: D) -> Result<Vec<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        List(Vec<Severity>),
        Csv(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::List(list) => Ok(list),
        Raw::Csv(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse().map_err(D::Error::custom))
            .collect(),
    }
}
