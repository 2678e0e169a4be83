//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use perks::config::{ApiConfig, Config};
use perks::ui::app::App;
use perks::ui::bridge::ApiCommand;
use tokio::sync::mpsc::Receiver;

/// App wired to a command channel the test can inspect.
pub fn make_app(base_url: &str) -> (App, Receiver<ApiCommand>) {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();

    let (tx, rx) = tokio::sync::mpsc::channel(16);
    let mut app = App::new(config);
    app.set_api_sender(tx);
    (app, rx)
}

/// Connection settings pointed at a test backend, with short timeouts.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}
