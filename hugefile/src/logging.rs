//! Development-time tracing.
//!
//! Diagnostics only: output goes to stderr and never affects the generated
//! file or the exit code.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber.
///
/// Filter comes from `RUST_LOG`, falling back to `warn`, so a normal run is
/// silent.
///
/// ```bash
/// RUST_LOG=hugefile=debug hugefile out.txt
/// ```
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
