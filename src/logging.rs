//! Logging initialisation.

use crate::config::Config;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Installs the global JSON subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. With `enable_xray`
/// set, span close events are logged with their timings.
pub fn init(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let span_events = if config.enable_xray {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    // A subscriber may already be installed (tests, repeated init).
    let _ = tracing_subscriber::fmt()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_env_filter(filter)
        .with_span_events(span_events)
        .with_target(false)
        .try_init();
}
