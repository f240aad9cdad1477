use clap::Parser;
use std::path::PathBuf;

/// Generate behavioral insights from user journal entries
#[derive(Parser, Debug)]
#[clap(name = "glean", about = "Generate behavioral insights from user journal entries")]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Path to the document store (overrides GLEAN_DB)
    #[clap(long)]
    pub db: Option<PathBuf>,

    /// Print verbose output
    #[clap(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
