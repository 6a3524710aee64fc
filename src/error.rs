//! Error types surfaced by the fetch and extract stages.
//!
//! Missing fields and empty listings are never errors; they degrade to
//! sentinel values or an empty result. Only a failed request or an
//! unusable selector layout is reported.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure while retrieving the listing page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned {status}")]
    Status { status: StatusCode, url: String },
    /// DNS, connect, timeout or body read failure.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Failure to build the structural queries used to walk the document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },
}

/// Umbrella error for a full fetch-and-extract run.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl NewsError {
    /// Short label used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            NewsError::Fetch(FetchError::Status { .. }) => "fetch_status",
            NewsError::Fetch(FetchError::Transport { .. }) => "fetch_transport",
            NewsError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_url_and_status() {
        let err = FetchError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://www.newswire.lk/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://www.newswire.lk/"));
    }

    #[test]
    fn test_news_error_is_transparent() {
        let err: NewsError = ParseError::Selector {
            selector: "div[".to_string(),
            message: "unexpected end".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "parse");
        assert_eq!(err.to_string(), "invalid selector `div[`: unexpected end");
    }
}
