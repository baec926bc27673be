//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Relay tracing/logging system.
///
/// Reads the `RELAY_LOG` environment variable for per-subsystem log levels.
/// Format: `RELAY_LOG=routing=debug,transfer=info`
///
/// Falls back to `relay=info` if `RELAY_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RELAY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("relay=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
