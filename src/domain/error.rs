//! Error types for the hubstate core.
//!
//! This module defines the centralized error type [`HubStateError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that no error defined here is fatal to the application: the store always
//! produces a valid state snapshot, and persistence failures are logged and
//! swallowed by the bridge rather than surfaced to dispatchers.

use thiserror::Error;

/// The main error type for hubstate operations.
///
/// This enum consolidates the error conditions that can occur in the persistence
/// and configuration layers. The in-memory core (store and reducer) is infallible
/// by design; invalid inputs there are normalized, not rejected.
///
/// # Examples
///
/// ```
/// use hubstate::domain::HubStateError;
///
/// fn validate_config() -> Result<(), HubStateError> {
///     Err(HubStateError::Config("missing storage path".to_string()))
/// }
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum HubStateError {
    /// Durable key-value storage operation failed.
    ///
    /// Occurs when reading from or writing to the preference store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Location (query-string) surface operation failed.
    ///
    /// Occurs when the navigable location cannot be read or replaced. The
    /// string contains a description of what went wrong.
    #[error("Location error: {0}")]
    Location(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for hubstate operations.
///
/// This is a type alias for `std::result::Result<T, HubStateError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, HubStateError>;
