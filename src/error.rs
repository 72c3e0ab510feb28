//! Error types for hex grid construction

use thiserror::Error;

/// Errors that can occur while configuring or building a grid
///
/// Runtime edits never fail: out-of-range coordinates are ignored and the
/// edit methods report whether anything was applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexGridError {
    /// Grid configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// Metrics constants violate a precondition
    #[error("invalid metrics: {0}")]
    InvalidMetrics(String),
}

/// Result type alias for hex grid operations
pub type Result<T> = std::result::Result<T, HexGridError>;
