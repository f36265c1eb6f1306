use tracing::{info, warn};

use crate::client::{ExpressClient, TrackingQuery};
use crate::message;

/// Run one query cycle: fetch the tracking page, decode it, and produce
/// the notification text.
///
/// Every failure mode degrades to a descriptive fallback message, so the
/// caller always has something to deliver.
pub async fn build_notification(client: &ExpressClient, query: &TrackingQuery) -> String {
    info!(tracking_number = %query.tracking_number, "querying express status");

    match client.fetch(query).await {
        Ok(body) => message::compose_report(&body, query),
        Err(err) => {
            warn!(error = %err, "express query failed");
            message::describe_fetch_error(&err)
        }
    }
}
