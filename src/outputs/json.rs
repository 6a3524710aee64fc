//! JSON rendering of a listing.

use crate::models::NewsItem;
use tracing::instrument;

/// Serialize `items` as a pretty-printed JSON array.
#[instrument(level = "debug", skip_all, fields(count = items.len()))]
pub fn render(items: &[NewsItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}
