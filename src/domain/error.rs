//! Error types for the zticker plugin.
//!
//! This module defines the centralized error type [`TickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for zticker plugin operations.
///
/// Covers every failure that can cross a layer boundary: the ticker fetch,
/// payload decoding, theme loading and configuration parsing. None of these are
/// fatal to the plugin; callers log them and fall back to an empty record set
/// or a default value.
///
/// # Examples
///
/// ```
/// use zticker::TickerError;
///
/// fn check_status(status: u16) -> Result<(), TickerError> {
///     if status == 200 {
///         Ok(())
///     } else {
///         Err(TickerError::Fetch(format!("unexpected status {status}")))
///     }
/// }
///
/// assert!(check_status(503).is_err());
/// ```
#[derive(Debug, Error)]
pub enum TickerError {
    /// The HTTP request did not produce a usable response.
    ///
    /// Raised for non-2xx statuses, including the synthetic failure status the
    /// host reports when the request never reached the server.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The response body was not a valid ticker envelope.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A configuration value is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zticker operations.
pub type Result<T> = std::result::Result<T, TickerError>;
