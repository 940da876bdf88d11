use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, DEFAULT_LOG_FILTER};

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber. Only the first call has any effect.
/// An unparsable filter falls back to the default directive.
pub fn init_tracing(config: &Config) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_new(&config.log_filter)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        if let Err(err) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(error = %err, "global subscriber already installed");
            return;
        }
        tracing::debug!(filter = %config.log_filter, "tracing initialized");
    });
}
