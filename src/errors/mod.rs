//! Error handling utilities for the glean application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents specific error cases that can occur during document store operations.
///
/// This enum provides detailed, contextual error information for different failure
/// modes when reading collections or committing the insight batch.
///
/// # Examples
///
/// ```
/// use glean::errors::StoreError;
///
/// let error = StoreError::Custom("users collection is missing".to_string());
/// assert!(format!("{}", error).contains("users collection is missing"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite error from the underlying store.
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// Custom store error with a detailed message.
    #[error("Store error: {0}")]
    Custom(String),
}

/// Represents specific error cases that can occur when calling the
/// chat-completion API.
///
/// # Examples
///
/// ```
/// use glean::errors::AiError;
///
/// let error = AiError::Api {
///     status: 401,
///     message: "invalid api key".to_string(),
/// };
/// assert!(format!("{}", error).contains("401"));
/// assert!(format!("{}", error).contains("invalid api key"));
/// ```
#[derive(Debug, Error)]
pub enum AiError {
    /// The API endpoint is not reachable (transport-level failure).
    #[error("Chat-completion API unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// The API returned a non-success status. The message is extracted from
    /// the JSON error body when present.
    #[error("Chat-completion API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Error message extracted from the response body
        message: String,
    },

    /// The API returned a body that could not be interpreted.
    #[error("Invalid response from chat-completion API: {0}")]
    InvalidResponse(String),
}

/// Represents all possible errors that can occur in the glean application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error`
/// trait implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use glean::errors::AppError;
///
/// let error = AppError::Config("GLEAN_API_KEY is not set".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Configuration error: GLEAN_API_KEY is not set"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors from the document store.
    #[error("Document store error: {0}")]
    Store(#[from] StoreError),

    /// Errors from the chat-completion API.
    #[error("AI error: {0}")]
    Ai(#[from] AiError),

    /// Generic internal failure surfaced to the caller. The detailed cause
    /// is logged, not carried here.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use glean::errors::{AppError, AppResult};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Internal("something went wrong".to_string()));
///     }
///     Ok("ok".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
