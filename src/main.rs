/*!
# Glean - Journal Insight Generation

Command-line entry point for the insight pipeline. One run is one invocation:
read all users and journal entries from the document store, request insight
text per user from the chat-completion API, and commit the results as a
single atomic batch.

## Usage

```
glean [OPTIONS]

Options:
      --db <DB>     Path to the document store (overrides GLEAN_DB)
  -v, --verbose     Enable verbose output
  -h, --help        Print help information
  -V, --version     Print version information
```

## Configuration

The application is configured with environment variables:
- `GLEAN_API_KEY`: Bearer credential for the chat-completion API (required)
- `GLEAN_API_URL`: Chat-completion endpoint (defaults to the OpenAI endpoint)
- `GLEAN_MODEL`: Chat model identifier (defaults to "gpt-4o-mini")
- `GLEAN_DB`: Path to the document store (defaults to "~/.local/share/glean/glean.db")
*/

use glean::ai::ChatClient;
use glean::cli::CliArgs;
use glean::config::Config;
use glean::errors::AppResult;
use glean::store::Store;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the glean application.
///
/// Coordinates the invocation flow:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Loads and validates configuration (fails fast without a credential)
/// 4. Opens the store and initializes its schema
/// 5. Constructs the chat client once
/// 6. Runs the pipeline and prints the success payload as JSON
///
/// # Errors
///
/// Returns an error if configuration is missing or invalid, a store read
/// fails, an insight request fails, or the batch commit fails (surfaced as a
/// generic internal error; the cause is logged).
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    info!("Starting glean");
    debug!("CLI arguments: {:?}", args);

    let mut config = Config::load()?;
    if let Some(db) = args.db {
        config.db_path = db;
    }
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let store = Store::open(&config.db_path)?;
    store.initialize_schema()?;

    let client = ChatClient::from_config(&config);

    let summary = glean::ops::run(&store, &client)?;

    println!(
        "{}",
        serde_json::to_string(&summary)
            .unwrap_or_else(|_| format!("{{\"message\":\"{}\"}}", summary.message))
    );
    info!("Invocation completed successfully");
    Ok(())
}
