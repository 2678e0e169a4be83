//! Tracing setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing with optional file output.
///
/// Logging is off by default: the TUI owns the terminal and stray
/// writes corrupt the display. Set `PERKS_LOG` to a file path to
/// enable it; `RUST_LOG` controls the filter as usual.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("PERKS_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("warning: failed to create log file {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
