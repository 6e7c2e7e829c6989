//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with workflow commands on stdout.
//! `RUST_LOG` takes precedence; otherwise GitHub's step debugging switch
//! (`RUNNER_DEBUG=1`) raises the level to debug.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is unset
pub fn default_directive(runner_debug: bool) -> &'static str {
    if runner_debug {
        "debug"
    } else {
        "warn"
    }
}

/// Whether a `RUNNER_DEBUG` value enables step debugging
pub fn is_runner_debug(value: Option<&str>) -> bool {
    matches!(value, Some("1") | Some("true"))
}

pub fn init_logging(runner_debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(runner_debug)));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
