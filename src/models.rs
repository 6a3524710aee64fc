//! Data model for scraped listing entries.
//!
//! A [`NewsItem`] always carries all three fields. When the page omits the
//! node a field comes from, the matching sentinel string is stored instead,
//! so consumers see the same shape for every entry.

use serde::{Deserialize, Serialize};

/// Placeholder used when an entry has no heading link.
pub const NO_TITLE: &str = "No title";
/// Placeholder used when an entry has no heading link (shared lookup with the title).
pub const NO_LINK: &str = "No link";
/// Placeholder used when an entry has no published timestamp.
pub const NO_DATE: &str = "No date";

/// One entry of the listing, in the order it appeared on the page.
///
/// Serialized as `{"title": ..., "date": ..., "link": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    /// Headline text, or [`NO_TITLE`].
    pub title: String,
    /// Published date exactly as shown on the page, or [`NO_DATE`].
    pub date: String,
    /// The headline's `href`, or [`NO_LINK`].
    pub link: String,
}

impl NewsItem {
    /// `true` when none of the fields had to fall back to a sentinel.
    pub fn is_complete(&self) -> bool {
        self.title != NO_TITLE && self.date != NO_DATE && self.link != NO_LINK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_item_serialization_keys() {
        let item = NewsItem {
            title: "Rain expected".to_string(),
            date: "October 18, 2026".to_string(),
            link: "https://www.newswire.lk/2026/10/18/rain/".to_string(),
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["title"], "Rain expected");
        assert_eq!(value["date"], "October 18, 2026");
        assert_eq!(value["link"], "https://www.newswire.lk/2026/10/18/rain/");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_news_item_deserialization() {
        let json = r#"{"title": "No title", "date": "No date", "link": "No link"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.title, NO_TITLE);
        assert!(!item.is_complete());
    }

    #[test]
    fn test_is_complete() {
        let mut item = NewsItem {
            title: "A".to_string(),
            date: "B".to_string(),
            link: "/c".to_string(),
        };
        assert!(item.is_complete());
        item.date = NO_DATE.to_string();
        assert!(!item.is_complete());
    }
}
