//! Constants used throughout the application.
//!
//! This module contains all constants used in the glean application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "glean";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Generate behavioral insights from user journal entries";

// Configuration Keys & Environment Variables
/// Environment variable holding the bearer credential for the chat-completion API.
pub const ENV_VAR_API_KEY: &str = "GLEAN_API_KEY";
/// Environment variable overriding the chat-completion endpoint URL.
pub const ENV_VAR_API_URL: &str = "GLEAN_API_URL";
/// Environment variable overriding the chat model identifier.
pub const ENV_VAR_MODEL: &str = "GLEAN_MODEL";
/// Environment variable overriding the document store path.
pub const ENV_VAR_DB: &str = "GLEAN_DB";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";

// Defaults
/// Default chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Default chat model identifier.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
/// Default store location relative to the user's home directory.
pub const DEFAULT_DB_SUBPATH: &str = ".local/share/glean/glean.db";

// Chat-completion request parameters
/// Maximum completion-token budget for a single insight request.
pub const MAX_INSIGHT_TOKENS: u32 = 3000;

// Document store collections
/// Collection of application user records.
pub const USERS_COLLECTION: &str = "app_users";
/// Collection of journal entries, tagged by uid.
pub const JOURNALS_COLLECTION: &str = "user_journals";
/// Collection of generated insights, keyed by uid.
pub const INSIGHTS_COLLECTION: &str = "users_insights";

// Caller-facing messages
/// Success payload message for a completed invocation.
pub const RUN_SUCCESS_MESSAGE: &str = "insights generated";
/// Generic message returned when the insight batch commit fails. The
/// underlying cause is logged server-side only.
pub const COMMIT_FAILURE_MESSAGE: &str = "failed to add insights";
