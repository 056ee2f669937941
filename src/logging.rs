//! Logging setup using tracing.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "ICON_EXPORT_LOG";

/// Installs a stderr `fmt` subscriber.
///
/// The filter comes from `ICON_EXPORT_LOG` when set, otherwise from
/// `default_level` (for example `info` or `debug`).
///
/// ```bash
/// ICON_EXPORT_LOG=icon_export=debug icon-export
/// ```
pub fn init(default_level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("icon_export={default_level},warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
