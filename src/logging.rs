//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` takes precedence; otherwise the level follows `-v` count:
//! none → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Returns the default filter directive for a verbosity count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "chrisnotes=info,warn",
        2 => "chrisnotes=debug,info",
        _ => "trace",
    }
}

/// Installs the global subscriber. Later calls are ignored.
pub fn init(verbosity: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 1)
        .with_level(true)
        .compact();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .is_ok()
    {
        tracing::debug!(
            version = env!("CARGO_PKG_VERSION"),
            verbosity,
            "logging initialized"
        );
    }
}
