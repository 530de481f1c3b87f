//! Error types for the advisor dashboard
//!
//! Library code returns `DashboardError`; views convert it into a
//! `UserNotice` before anything reaches the screen.

use thiserror::Error;

/// Main error type for backend and configuration failures
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Transport-level failures (unreachable host, timeout, decode)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Payload decoded but violates the dashboard data contract
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Local input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DashboardError {
    /// True when the backend reported the requested record as missing
    pub fn is_not_found(&self) -> bool {
        match self {
            DashboardError::Status { status, .. } => *status == 404,
            DashboardError::HttpError(e) => e.status().map(|s| s.as_u16()) == Some(404),
            _ => false,
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
