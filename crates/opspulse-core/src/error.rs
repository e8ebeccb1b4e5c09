// Error types for the dashboard backend

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Errors that can occur while serving dashboard records
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Key-value store error
    #[error("store error: {0}")]
    Store(String),

    /// Stored payload could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DashboardError {
    /// Create a store error
    pub fn store(msg: impl Into<String>) -> Self {
        DashboardError::Store(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        DashboardError::Configuration(msg.into())
    }
}
