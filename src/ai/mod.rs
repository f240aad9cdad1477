//! Chat-completion API integration for insight generation.
//!
//! # Module Structure
//!
//! - `client`: Bearer-authenticated HTTP client and the `InsightSource` trait
//! - `prompts`: The fixed insight instruction builder
//!
//! # Example
//!
//! ```no_run
//! use glean::ai::{ChatClient, InsightSource};
//!
//! let client = ChatClient::new(
//!     "https://api.openai.com/v1/chat/completions",
//!     "sk-...",
//!     "gpt-4o-mini",
//! );
//! let reply = client.generate(r#"[{"uid":"u1","moodToday":"ok"}]"#)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod client;
pub mod prompts;

// Re-export commonly used types
pub use client::{ChatClient, InsightSource, Message};
pub use prompts::insight_prompt;
