//! Errors for the fallible parts of the crate: configuration and thread pool setup.
//!
//! The sort functions themselves have no failure channel.

use thiserror::Error;

/// Main error type for sort_ext operations
#[derive(Error, Debug)]
pub enum SortError {
    /// Invalid or unparsable configuration values
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The dedicated rayon pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Type alias for Results using SortError
pub type Result<T> = std::result::Result<T, SortError>;

impl SortError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
