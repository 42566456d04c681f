//! Error types for quoth
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for quoth
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid import: {0}")]
    Import(String),

    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for quoth
pub type Result<T> = std::result::Result<T, QuoteError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_connect() {
        let host = e
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("server")
            .to_string();
        return format!("Could not connect to {host}");
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
