//! inspector-alerts - relays Inspector findings to Slack and SNS
//!
//! The library holds the finding model, configuration, payload formatting and
//! the dispatcher; `main.rs` wires them to the Lambda runtime.

pub mod cli;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod formatting;
pub mod handler;
pub mod logging;
pub mod notification;

// Re-export core types for convenience
pub use crate::core::*;
pub use dispatcher::{AlertDispatcher, DispatchError};
