//! Shared fixtures and local servers for tests.

use crate::error::FetchError;
use crate::fetcher::PageFetcher;
use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use reqwest::StatusCode as ReqwestStatus;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

/// Snapshot-style homepage with 7 fully populated entries inside the
/// widget and one decoy entry outside it.
pub const FIXTURE_HOME: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/newswire_home.html"
));

/// Titles of the fixture entries, in page order.
pub const FIXTURE_TITLES: [&str; 7] = [
    "Cabinet approves new fuel pricing formula",
    "Heavy rain warning for five provinces",
    "Central Bank holds policy rates",
    "Sri Lanka clinch ODI series",
    "Colombo Port City draws new investors",
    "New expressway section opens",
    "Tea exports rise in September",
];

/// One fully populated entry.
pub fn unit(title: &str, date: &str, href: &str) -> String {
    format!(
        r#"<div class="posts-listunit">
             <h4 class="posts-listunit-title"><a href="{href}">{title}</a></h4>
             <time class="entry-published">{date}</time>
           </div>"#
    )
}

/// Wrap entries in a listing widget container.
pub fn listing_page(units: &[String]) -> String {
    format!("<div class=\"posts-list-widget\">{}</div>", units.concat())
}

/// Serve `body` with `status` on every path; returns the bound address.
pub async fn spawn_page_server(status: StatusCode, body: &'static str) -> SocketAddr {
    let app = Router::new().fallback(move || async move { (status, body) });
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// URL of a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/")
}

/// [`PageFetcher`] returning a canned result and counting calls.
#[derive(Debug)]
pub enum CannedFetcher {
    Page(&'static str, AtomicUsize),
    Status(u16, AtomicUsize),
}

impl CannedFetcher {
    pub fn page(body: &'static str) -> Self {
        CannedFetcher::Page(body, AtomicUsize::new(0))
    }

    pub fn status(code: u16) -> Self {
        CannedFetcher::Status(code, AtomicUsize::new(0))
    }

    pub fn calls(&self) -> usize {
        match self {
            CannedFetcher::Page(_, c) | CannedFetcher::Status(_, c) => c.load(Ordering::SeqCst),
        }
    }
}

#[async_trait]
impl PageFetcher for CannedFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        match self {
            CannedFetcher::Page(body, calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(body.to_string())
            }
            CannedFetcher::Status(code, calls) => {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(FetchError::Status {
                    status: ReqwestStatus::from_u16(*code).unwrap(),
                    url: url.to_string(),
                })
            }
        }
    }
}
