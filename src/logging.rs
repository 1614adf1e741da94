//! Logging setup for AutoAnalyst.
//!
//! Installs a console subscriber on stderr so log lines never mix with
//! report output on stdout. The default level is `info`; set `RUST_LOG`
//! to override.
//!
//! ```no_run
//! autoanalyst::logging::init().expect("Failed to initialize logging");
//! tracing::info!("started");
//! ```

use crate::error::{Error, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Initializes the tracing subscriber. Call once at startup.
pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| Error::Config(format!("invalid RUST_LOG filter: {e}")))?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();

    Ok(())
}
