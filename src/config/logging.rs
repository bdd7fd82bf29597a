//! Diagnostic logging setup
//!
//! Diagnostics go to stderr so they never mix with command output.
//! `FITCOACH_LOG` takes an `EnvFilter` directive (default `warn`), and
//! `FITCOACH_LOG_FORMAT=json` switches to JSON lines.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive
pub const LOG_ENV: &str = "FITCOACH_LOG";

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "FITCOACH_LOG_FORMAT";

/// Install the global tracing subscriber
///
/// `verbose` raises the default level to `debug` for this crate when no
/// explicit filter is set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose { "fitcoach=debug" } else { "warn" };
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| default_directive.to_string());
    let json_logs = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v == "json")
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. in tests) is harmless
    if json_logs {
        let _ = builder.json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
