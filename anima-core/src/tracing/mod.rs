//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Anima tracing/logging system.
///
/// Reads `ANIMA_LOG` for per-subsystem log levels, e.g.
/// `ANIMA_LOG=extractor=debug,history=info`. Falls back to `anima=info`
/// when unset or invalid.
///
/// Idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ANIMA_LOG")
            .unwrap_or_else(|_| EnvFilter::new("anima=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
