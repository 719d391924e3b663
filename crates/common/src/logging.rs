//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::EnvFilter;

use crate::SiteConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured default filter. `LOG_FORMAT=json`
/// switches to structured output; anything else prints the pretty format.
pub fn init_tracing(config: &SiteConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.rust_log))
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", config.rust_log, e))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.log_format.eq_ignore_ascii_case("json") {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
