//! Command-Line Interface (CLI) argument parsing.
//!
//! The function normally runs under the Lambda runtime with no arguments; the
//! flags exist for local runs. They are merged on top of the file and
//! environment configuration.

use clap::Parser;
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Relays Inspector findings to Slack and SNS.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dispatch a single finding event read from FILE instead of serving
    /// Lambda invocations.
    #[arg(short, long, value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// Comma-separated severities that trigger notifications.
    #[arg(long, value_name = "SEVERITIES")]
    pub sev_list: Option<String>,

    /// Log level filter (e.g. "debug").
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(sev_list) = &self.sev_list {
            dict.insert("sev_list".into(), Value::from(sev_list.clone()));
        }

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
