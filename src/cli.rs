//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

/// Terminal client for the purchase rewards service.
#[derive(Debug, Parser)]
#[command(name = "perks", version, about)]
pub struct Cli {
    /// Screen to open at startup, as a path: "/" or
    /// "/achievements/<email>".
    #[arg(value_name = "ROUTE")]
    pub route: Option<String>,

    /// Shortcut for "/achievements/<email>".
    #[arg(long, value_name = "EMAIL", conflicts_with = "route")]
    pub email: Option<String>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL for this run.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
