/*!
# Glean

Glean aggregates per-user journal entries from a document store, sends them to
a chat-completion API to produce behavioral insights, and writes the results
back to the store as one atomic batch.

## Pipeline

One invocation runs a single linear pipeline:

1. List all users
2. List all journal entries
3. For each user with at least one entry, request insight text from the
   chat-completion API (strictly sequentially, one in-flight request)
4. Commit one insight document per user as a single atomic batch

No state is retained between invocations; every run re-reads the collections
from scratch.

## Architecture

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `store`: Document store access (users, journals, insights)
- `ai`: Chat-completion client and prompt construction
- `ops`: The pipeline orchestration

## Usage Example

```rust,no_run
use glean::ai::ChatClient;
use glean::store::Store;
use glean::{ops, Config};

fn main() -> glean::AppResult<()> {
    let config = Config::load()?;

    let store = Store::open(&config.db_path)?;
    store.initialize_schema()?;

    let client = ChatClient::from_config(&config);
    let summary = ops::run(&store, &client)?;
    println!("{}", summary.message);
    Ok(())
}
```
*/

/// Chat-completion client and prompt construction
pub mod ai;
/// Command-line interface for parsing user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Pipeline orchestration
pub mod ops;
/// Document store access
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use ops::{RunSummary, UserInsight};
pub use store::{DocumentStore, Insight, JournalEntry, User};
