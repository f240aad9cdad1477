//! High-level operations composing the store and the insight client.

pub mod insights;

pub use insights::{generate_insights, run, RunSummary, UserInsight};
