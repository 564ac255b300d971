//! Diagnostic logging setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "TSCRIPTIFY_LOG";

/// Install the stderr subscriber.
///
/// `TSCRIPTIFY_LOG` wins when set; otherwise only warnings are shown, or
/// debug events with `verbose`.
pub fn init(verbose: bool) {
    let default = if verbose {
        "tscriptify=debug"
    } else {
        "tscriptify=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
