//! Tracing initialization and subscriber setup.
//!
//! Configures a `tracing-subscriber` registry with an [`EnvFilter`] and a plain-text fmt
//! layer, writing either to stderr or to a [`RotatingFile`].

use super::file_writer::RotatingFile;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive when neither config nor `RUST_LOG` provides one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from config, then `RUST_LOG`, then the `info` default.
fn build_filter(config: &Config) -> EnvFilter {
    config.trace_level.as_deref().map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        EnvFilter::new,
    )
}

/// Initializes the global tracing subscriber.
///
/// # Parameters
///
/// * `config` - Configuration carrying `trace_level` and `log_file`
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory when `log_file` is set
/// - Falls back to stderr if that directory cannot be created (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use facetfolio::observability::init_tracing;
/// use facetfolio::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = build_filter(config);

    let log_file = config.log_file.as_ref().filter(|path| {
        path.parent()
            .map_or(true, |dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok())
    });

    let result = match log_file {
        Some(path) => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(RotatingFile::new(path.clone())),
            )
            .try_init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(log_file = ?log_file, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            trace_level: Some("debug".to_string()),
            log_file: Some(dir.path().join("logs").join("facetfolio.log")),
            ..Config::default()
        };

        init_tracing(&config);
        init_tracing(&config);
        tracing::debug!("after init");
    }
}
