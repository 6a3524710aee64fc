//! # Newswire Feed
//!
//! Scrapes the latest headlines from [newswire.lk](https://www.newswire.lk/)
//! and exposes them as JSON.
//!
//! ## Usage
//!
//! ```sh
//! newswire_feed serve --bind 0.0.0.0:5000
//! curl 'http://localhost:5000/latest-news?count=3'
//!
//! newswire_feed fetch -n 5
//! ```
//!
//! ## Architecture
//!
//! Each request runs one independent pipeline:
//! 1. **Fetching**: one `GET` of the listing page ([`fetcher`])
//! 2. **Extracting**: the first N entries become `{title, date, link}` ([`scrapers`])
//! 3. **Output**: JSON over HTTP ([`server`]) or printed once ([`outputs`])

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod feed;
mod fetcher;
mod models;
mod outputs;
mod scrapers;
mod server;
mod utils;

#[cfg(test)]
mod test_support;

use cli::{Cli, Command};
use feed::NewsFeed;
use fetcher::HttpFetcher;
use server::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout_secs))?;
    let feed = NewsFeed::newswire(Arc::new(fetcher), args.url.as_str())?;

    match args.command {
        Command::Serve { bind, count } => {
            let state = AppState {
                feed: Arc::new(feed),
                default_count: count,
            };
            server::serve(bind, state).await?;
        }
        Command::Fetch { count, json } => {
            let start_time = std::time::Instant::now();
            let items = feed.latest(count).await?;
            if json {
                println!("{}", outputs::json::render(&items)?);
            } else {
                print!("{}", outputs::text::render(&items));
            }
            info!(
                count = items.len(),
                millis = start_time.elapsed().as_millis() as u64,
                "Fetch complete"
            );
        }
    }

    Ok(())
}
