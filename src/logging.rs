//! Logging via `tracing` and `tracing-subscriber`, written to stderr so
//! reports on stdout stay clean.
//!
//! - `warn` (default): rejected edits, degraded templates, bad preferences
//! - `info` (`-v`): commands and output files
//! - `debug` (`-vv`): render passes, cache hits, field writes
//! - `trace` (`-vvv`): everything

use std::str::FromStr;

use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: Level,
    pub with_target: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Verbosity count wins; otherwise the config-file level; otherwise `warn`.
    pub fn from_verbosity(verbosity: u8, configured: Option<&str>) -> Self {
        let level = match verbosity {
            0 => configured
                .and_then(|l| Level::from_str(l).ok())
                .unwrap_or(Level::WARN),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(config: &LogConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .with_ansi(config.with_ansi)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// `RUST_LOG` overrides the configured level.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!("warn,site_basics={level}", level = level))
    })
}
