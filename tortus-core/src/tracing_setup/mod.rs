//! Tracing setup — structured logging with span definitions.

pub mod spans;

use tracing_subscriber::EnvFilter;

use crate::config::{defaults, ObservabilityConfig};

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TORTUS_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Calling it again is a no-op, since
/// notebook hosts re-run setup cells.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig {
        json_logs: true,
        ..ObservabilityConfig::default()
    });
}

/// Initialize tracing from configuration. `TORTUS_LOG` wins over
/// `log_level` when set.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_env(defaults::LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    // Err means a global subscriber is already installed.
    let _ = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .try_init();
}
