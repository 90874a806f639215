//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `filter` when set and valid. Later calls are no-ops,
/// as is a call made after another subscriber was installed.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(filter))
            .unwrap_or_else(|_| EnvFilter::new(wardrobe_core::config::DEFAULT_LOG_FILTER));

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();

        if let Err(e) = result {
            tracing::debug!("Tracing already initialized: {}", e);
        }
    });
}
