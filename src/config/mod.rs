//! Configuration management for the glean application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. The bearer credential for
//! the chat-completion API is required and has no default: loading fails fast
//! when it is absent rather than letting an unauthenticated request reach the
//! API.
//!
//! # Environment Variables
//!
//! - `GLEAN_API_KEY`: Bearer credential for the chat-completion API (required)
//! - `GLEAN_API_URL`: Chat-completion endpoint (defaults to the OpenAI endpoint)
//! - `GLEAN_MODEL`: Chat model identifier (defaults to gpt-4o-mini)
//! - `GLEAN_DB`: Path to the document store (defaults to ~/.local/share/glean/glean.db)
//! - `HOME`: Used for expanding the default store path

use crate::constants::{
    DEFAULT_API_URL, DEFAULT_CHAT_MODEL, DEFAULT_DB_SUBPATH, ENV_VAR_API_KEY, ENV_VAR_API_URL,
    ENV_VAR_DB, ENV_VAR_HOME, ENV_VAR_MODEL,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the glean application.
///
/// This struct holds the settings needed for one invocation: the credential
/// and endpoint for the chat-completion API, the model to use, and the path
/// to the document store.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use glean::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     api_key: "sk-test".to_string(),
///     api_url: "http://localhost:8080/v1/chat/completions".to_string(),
///     model: "gpt-4o-mini".to_string(),
///     db_path: PathBuf::from("/tmp/glean.db"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Bearer credential for the chat-completion API.
    ///
    /// Loaded from `GLEAN_API_KEY`; there is no default and loading fails
    /// when it is unset or empty.
    pub api_key: String,

    /// Chat-completion endpoint URL.
    pub api_url: String,

    /// Chat model identifier sent with every request.
    pub model: String,

    /// Path to the document store file.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .field("db_path", &self.db_path)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// The store path is expanded with `shellexpand` to handle `~` and
    /// environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - `GLEAN_API_KEY` is unset or empty
    /// - The store path expansion fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use glean::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Using model: {}", config.model),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // The credential is required. Fail fast here rather than sending an
        // unauthenticated request later.
        let api_key = env::var(ENV_VAR_API_KEY).unwrap_or_default();
        if api_key.is_empty() {
            return Err(AppError::Config(format!(
                "{} is not set. Provide the chat-completion API credential via this environment variable",
                ENV_VAR_API_KEY
            )));
        }

        let api_url = env::var(ENV_VAR_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let model = env::var(ENV_VAR_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        let db_path_str = env::var(ENV_VAR_DB).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DB_SUBPATH)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand store path: {}", e)))?;

        let config = Config {
            api_key,
            api_url,
            model,
            db_path: PathBuf::from(expanded_path.into_owned()),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if any of the credential, endpoint, model,
    /// or store path is empty.
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config("API credential is empty".to_string()));
        }

        if self.api_url.is_empty() {
            return Err(AppError::Config("API endpoint URL is empty".to_string()));
        }

        if self.model.is_empty() {
            return Err(AppError::Config("Chat model identifier is empty".to_string()));
        }

        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Store path is empty".to_string()));
        }

        Ok(())
    }
}
