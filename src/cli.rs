//! Command-line interface definitions.
//!
//! Every option can also be supplied through the environment variable shown
//! in `--help`.

use crate::feed::DEFAULT_COUNT;
use crate::fetcher::DEFAULT_TIMEOUT;
use crate::scrapers::newswire::NEWSWIRE_URL;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use url::Url;

/// Latest headlines from newswire.lk.
///
/// # Examples
///
/// ```sh
/// # Serve GET /latest-news on the default address
/// newswire_feed serve
///
/// # Print the latest 10 entries once
/// newswire_feed fetch -n 10
///
/// # Same, as JSON, with a shorter timeout
/// newswire_feed --timeout-secs 5 fetch --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Listing page to scrape
    #[arg(long, env = "NEWSWIRE_URL", default_value = NEWSWIRE_URL, global = true)]
    pub url: Url,

    /// Give up on the listing request after this many seconds
    #[arg(
        long,
        env = "NEWSWIRE_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
        global = true
    )]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the latest entries over HTTP at /latest-news
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "NEWSWIRE_BIND", default_value = "127.0.0.1:5000")]
        bind: SocketAddr,

        /// Entries returned when the request has no `count` parameter
        #[arg(short = 'n', long, env = "NEWSWIRE_COUNT", default_value_t = DEFAULT_COUNT)]
        count: usize,
    },
    /// Fetch the listing once and print it
    Fetch {
        /// Number of entries to print
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
        count: usize,

        /// Print JSON instead of a numbered list
        #[arg(long)]
        json: bool,
    },
}
