//! Listing-page scrapers.
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Newswire (Sri Lanka) | [`newswire`] | HTML scraping | Homepage "posts list" widget |
//!
//! A scraper module exports a layout describing where entries live in the
//! page and an extractor that maps each entry to a [`NewsItem`](crate::models::NewsItem).
//! Extraction is a pure function of the HTML; fetching lives in
//! [`fetcher`](crate::fetcher).

pub mod newswire;
