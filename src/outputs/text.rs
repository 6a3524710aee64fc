//! Plain-text rendering of a listing.
//!
//! ```text
//! 1. Cabinet approves new fuel pricing formula — October 18, 2026
//!    https://www.newswire.lk/2026/10/18/cabinet-approves-new-fuel-pricing-formula/
//! ```

use crate::models::NewsItem;

/// Numbered, 1-based listing with the link indented under each headline.
pub fn render(items: &[NewsItem]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            format!(
                "{}. {} — {}\n   {}\n",
                idx + 1,
                item.title,
                item.date,
                item.link
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_numbers_from_one() {
        let items = vec![
            NewsItem {
                title: "First".to_string(),
                date: "Mon".to_string(),
                link: "/1".to_string(),
            },
            NewsItem {
                title: "Second".to_string(),
                date: "Tue".to_string(),
                link: "/2".to_string(),
            },
        ];

        assert_eq!(
            render(&items),
            "1. First — Mon\n   /1\n2. Second — Tue\n   /2\n"
        );
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render(&[]), "");
    }
}
