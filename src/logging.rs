use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Settings for the console trace output.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Colour the output; on by default only when stderr is a terminal.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            ansi: std::io::stderr().is_terminal(),
        }
    }
}

/// Installs the global subscriber: trace events go to stderr, reports stay on stdout.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
