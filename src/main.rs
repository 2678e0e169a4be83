use anyhow::{anyhow, Context};
use clap::Parser;

use perks::cli::Cli;
use perks::config::Config;
use perks::logging::init_tracing;
use perks::ui::router::Route;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    // Precedence: --base-url flag, then env var, then the config file.
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    } else if let Ok(base_url) = std::env::var("PERKS_API_BASE_URL") {
        config.api.base_url = base_url;
    }
    config.validate()?;

    let initial_route = if let Some(email) = cli.email {
        Route::Achievements { email }
    } else if let Some(path) = &cli.route {
        Route::parse(path).ok_or_else(|| anyhow!("unrecognized route '{path}'"))?
    } else {
        Route::Purchase
    };

    tracing::info!(route = %initial_route.path(), base_url = %config.api.base_url, "starting");
    perks::ui::run(config, initial_route)
}
