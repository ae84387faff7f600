//! Logging setup (tracing-subscriber)
//! Logs go to stderr; stdout carries only the check report.

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Format;

const DEFAULT_LOG_FILTER: &str = "hello_smoke=info";

/// Install the global subscriber
///
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(format: Format) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    match format {
        Format::Json => {
            // Machine-readable structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()?;
        }
        Format::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()?;
        }
    }

    Ok(())
}
