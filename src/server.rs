//! HTTP surface: `GET /latest-news`.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | success | 200 | JSON array of `{"title", "date", "link"}` |
//! | fetch or parse failure | 500 | `{"error": "<message>"}` |
//!
//! `?count=N` overrides the configured number of entries. CORS is open to
//! any origin for `GET`.

use crate::error::NewsError;
use crate::feed::NewsFeed;
use crate::models::NewsItem;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument};

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub feed: Arc<NewsFeed>,
    pub default_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    pub count: Option<usize>,
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/latest-news", get(latest_news))
        .layer(cors)
        .with_state(state)
}

#[instrument(level = "info", skip_all, fields(count = tracing::field::Empty))]
async fn latest_news(
    State(state): State<AppState>,
    Query(query): Query<LatestQuery>,
) -> Result<Json<Vec<NewsItem>>, NewsError> {
    let count = query.count.unwrap_or(state.default_count);
    tracing::Span::current().record("count", count);

    match state.feed.latest(count).await {
        Ok(items) => Ok(Json(items)),
        Err(e) => {
            error!(kind = e.kind(), error = %e, "latest-news request failed");
            Err(e)
        }
    }
}

/// Bind `addr` and serve until Ctrl-C.
#[instrument(level = "info", skip(state))]
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<(), Box<dyn Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        source = %state.feed.url(),
        default_count = state.default_count,
        "Serving /latest-news"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
}
