//! Renderers for the one-shot `fetch` command.
//!
//! - [`text`]: numbered listing for terminals
//! - [`json`]: pretty JSON, same shape as the HTTP response

pub mod json;
pub mod text;
