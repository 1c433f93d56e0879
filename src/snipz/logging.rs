//! Diagnostic logging.
//!
//! Library code emits `tracing` events; nothing is printed unless a subscriber is
//! installed. The binary calls [`init`] once at startup. Logs go to stderr so
//! they never mix with menu or snippet output on stdout.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "snipz=debug"
    } else {
        "snipz=warn"
    }
}

/// Installs the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
/// Later calls are no-ops.
pub fn init(verbose: bool) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
        let installed = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        if installed.is_err() {
            tracing::debug!("a global subscriber was already set");
        }
    });
}
