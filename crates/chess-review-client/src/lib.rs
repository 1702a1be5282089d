//! HTTP client for the chess analysis backend.
//!
//! - [`HttpAnalysisService`] - [`chess_review::AnalysisService`] over HTTP
//! - [`ClientConfig`] - Endpoint, timeout and user agent, read from `review.toml`

pub mod config;
pub mod http;

pub use config::{ClientConfig, ConfigError};
pub use http::HttpAnalysisService;
