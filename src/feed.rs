//! Fetch-then-extract composition.
//!
//! A [`NewsFeed`] owns an injected [`PageFetcher`], a compiled
//! [`Extractor`] and the listing URL. It keeps no state between calls, so a
//! single instance can be shared by any number of concurrent requests.

use crate::error::NewsError;
use crate::fetcher::PageFetcher;
use crate::models::NewsItem;
use crate::scrapers::newswire::{Extractor, ListingLayout};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// Number of entries returned when the caller does not ask for a count.
pub const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct NewsFeed {
    fetcher: Arc<dyn PageFetcher>,
    extractor: Extractor,
    url: String,
}

impl NewsFeed {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        extractor: Extractor,
        url: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            url: url.into(),
        }
    }

    /// Build a feed reading the newswire.lk listing markup from `url`.
    pub fn newswire(
        fetcher: Arc<dyn PageFetcher>,
        url: impl Into<String>,
    ) -> Result<Self, NewsError> {
        Self::with_layout(fetcher, &ListingLayout::default(), url)
    }

    /// Build a feed whose entries are located by `layout`.
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Transport used for every [`latest`](Self::latest) call
    /// * `layout` - CSS queries for entries, heading links and timestamps
    /// * `url` - Listing page to read
    ///
    /// # Errors
    ///
    /// [`NewsError::Parse`] if any query in `layout` is not valid CSS.
    pub fn with_layout(
        fetcher: Arc<dyn PageFetcher>,
        layout: &ListingLayout,
        url: impl Into<String>,
    ) -> Result<Self, NewsError> {
        let extractor = layout.compile()?;
        Ok(Self::new(fetcher, extractor, url))
    }

    /// Listing page this feed reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the listing page and return its first `count` entries.
    ///
    /// # Arguments
    ///
    /// * `count` - Maximum number of entries to return
    ///
    /// # Returns
    ///
    /// Up to `count` entries in page order. A failed fetch is returned as-is
    /// and the page is never parsed.
    #[instrument(level = "info", skip(self), fields(url = %self.url))]
    pub async fn latest(&self, count: usize) -> Result<Vec<NewsItem>, NewsError> {
        let t0 = Instant::now();
        let html = self.fetcher.fetch(&self.url).await?;
        let items = self.extractor.extract(&html, count);
        info!(
            returned = items.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Latest news ready"
        );
        Ok(items)
    }
}
