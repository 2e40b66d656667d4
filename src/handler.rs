//! The Lambda invocation boundary.

use crate::core::{DispatchStatus, FindingEvent};
use crate::dispatcher::AlertDispatcher;
use lambda_runtime::LambdaEvent;
use tracing::{debug, info_span, Instrument};

/// Service name attached to every invocation span.
pub const SERVICE_NAME: &str = "inspector-alerts";

/// Handles one Lambda invocation.
///
/// Opens an `invocation` span carrying the request context, then dispatches
/// the finding. A dispatch error fails the invocation.
pub async fn handle_event(
    dispatcher: &AlertDispatcher,
    event: LambdaEvent<FindingEvent>,
) -> Result<DispatchStatus, lambda_runtime::Error> {
    let (finding, context) = event.into_parts();
    let span = info_span!(
        "invocation",
        service = SERVICE_NAME,
        request_id = %context.request_id,
        function_arn = %context.invoked_function_arn
    );

    async move {
        debug!(
            severity = %finding.detail.severity,
            title = %finding.detail.title,
            "Received finding"
        );
        let status = dispatcher.dispatch(&finding).await?;
        Ok::<_, lambda_runtime::Error>(status)
    }
    .instrument(span)
    .await
}
