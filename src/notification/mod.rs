//! Clients for the notification outlets.
//!
//! Each client implements one of the outlet traits in `core`, so the
//! dispatcher can be exercised against fakes.
pub mod slack;
pub mod sns;

use thiserror::Error;

/// Errors from publishing to a pub/sub topic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PublishError {
    /// The request could not be built from the supplied parameters.
    #[error("The parameters you provided are incorrect: {0}")]
    InvalidParameters(String),

    /// The service or the transport rejected the request.
    #[error("SNS publish failed: {0}")]
    Client(String),
}
