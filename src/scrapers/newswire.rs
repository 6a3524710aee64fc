//! Newswire homepage scraper.
//!
//! Entries are read from the "posts list" widgets on
//! [newswire.lk](https://www.newswire.lk/):
//!
//! ```html
//! <div class="posts-list-widget">
//!   <div class="posts-listunit">
//!     <h4 class="posts-listunit-title"><a href="https://...">Headline</a></h4>
//!     <time class="entry-published">October 18, 2026</time>
//!   </div>
//! </div>
//! ```
//!
//! If the site changes this markup the selection simply comes back empty.

use crate::error::ParseError;
use crate::models::{NO_DATE, NO_LINK, NO_TITLE, NewsItem};
use crate::utils::stripped_text;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

/// Homepage of the source site.
pub const NEWSWIRE_URL: &str = "https://www.newswire.lk/";

/// CSS queries locating entries and their fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingLayout {
    /// Container class followed by the entry class (descendant combinator).
    pub item: String,
    /// Link inside the entry heading; provides both title and link.
    pub heading_link: String,
    /// Published timestamp inside the entry.
    pub published: String,
}

impl Default for ListingLayout {
    fn default() -> Self {
        Self {
            item: "div.posts-list-widget div.posts-listunit".to_string(),
            heading_link: "h4.posts-listunit-title a".to_string(),
            published: "time.entry-published".to_string(),
        }
    }
}

impl ListingLayout {
    /// Compile the queries into an [`Extractor`].
    ///
    /// # Errors
    ///
    /// [`ParseError::Selector`] naming the first query that is not valid CSS.
    pub fn compile(&self) -> Result<Extractor, ParseError> {
        Ok(Extractor {
            item: compile(&self.item)?,
            heading_link: compile(&self.heading_link)?,
            published: compile(&self.published)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// Compiled [`ListingLayout`]. Immutable and reusable across requests.
#[derive(Debug, Clone)]
pub struct Extractor {
    item: Selector,
    heading_link: Selector,
    published: Selector,
}

impl Extractor {
    /// Parse `html` and return at most `n` entries in document order.
    ///
    /// The HTML parser recovers from any input, so this step cannot fail;
    /// invalid queries are rejected earlier by [`ListingLayout::compile`].
    ///
    /// # Arguments
    ///
    /// * `html` - The listing page body
    /// * `n` - Maximum number of entries to return
    ///
    /// # Returns
    ///
    /// Entries missing a field get the matching sentinel instead of being
    /// dropped. A page without any entry yields an empty vector.
    #[instrument(level = "info", skip_all, fields(bytes = html.len(), n = n))]
    pub fn extract(&self, html: &str, n: usize) -> Vec<NewsItem> {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            debug!(
                count = document.errors.len(),
                "Parser recovered from malformed markup"
            );
        }

        let items: Vec<NewsItem> = document
            .select(&self.item)
            .take(n)
            .map(|node| self.item_from(node))
            .collect();

        let complete = items.iter().filter(|i| i.is_complete()).count();
        info!(count = items.len(), complete, "Extracted listing entries");
        items
    }

    fn item_from(&self, node: ElementRef<'_>) -> NewsItem {
        let heading = node.select(&self.heading_link).next();
        let title = heading
            .map(stripped_text)
            .unwrap_or_else(|| NO_TITLE.to_string());
        let link = heading
            .and_then(|a| a.value().attr("href"))
            .unwrap_or(NO_LINK)
            .to_string();
        let date = node
            .select(&self.published)
            .next()
            .map(stripped_text)
            .unwrap_or_else(|| NO_DATE.to_string());

        NewsItem { title, date, link }
    }
}
