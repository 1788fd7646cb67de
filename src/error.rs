//! Server error types.

use thiserror::Error;

/// Failure while bringing the server up or running it.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listener could not bind its address.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address we tried to bind.
        address: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
