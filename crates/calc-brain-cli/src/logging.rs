//! Log subscriber setup

use crate::config::Verbosity;
use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Installs the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the filter follows `verbosity`.
/// Safe to call multiple times.
pub fn init_tracing(verbosity: Verbosity) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

        // A subscriber installed elsewhere (e.g. by a test harness) is left alone
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
}
