//! Diagnostic logging through `tracing`.
//!
//! User-facing CLI output goes through `ui::messages`; this subscriber only
//! carries diagnostics and request traces, always on stderr.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. `RUST_LOG` wins over `default_directives`.
pub fn init(default_directives: &str) {
    if INIT.get().is_some() {
        return;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    let _ = INIT.set(());
}
