//! Error types for the application

use thiserror::Error;

/// Result type alias using our DeskError
pub type Result<T> = std::result::Result<T, DeskError>;

/// Main error type for pricing, market and driver operations
#[derive(Error, Debug)]
pub enum DeskError {
    /// A total was requested before any cost strategy was selected
    #[error("Invalid state: cost strategy not set")]
    StrategyNotSet,

    /// Fare arithmetic left the representable decimal range
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Driver input that could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Console I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
