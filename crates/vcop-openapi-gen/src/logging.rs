//! Logging initialization.
//!
//! All log output goes to stderr so stdout only carries the run summary and
//! `--print-config` output.
//!
//! - **Pretty**: multi-line output with file and line, for local debugging
//! - **Compact**: one line per event (default)
//! - **Json**: structured events for CI log collectors, through a
//!   non-blocking writer

use clap::ValueEnum;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fallback log level variable, used when `RUST_LOG` is not set.
pub const LOG_LEVEL_ENV: &str = "VCOP_OPENAPI_LOG_LEVEL";

/// Output format of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-friendly multi-line output.
    Pretty,
    /// Single-line output.
    #[default]
    Compact,
    /// Newline-delimited JSON.
    Json,
}

/// Initializes the global subscriber.
///
/// The returned guard flushes buffered JSON events when dropped and must be
/// kept alive until the program exits.
///
/// # Errors
///
/// Returns an error if the env filter cannot be parsed.
pub fn init(format: LogFormat) -> anyhow::Result<Option<WorkerGuard>> {
    let log_level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&log_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .init();
            Ok(None)
        }
        LogFormat::Compact => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .compact()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_ansi(false),
                )
                .init();
            Ok(None)
        }
        LogFormat::Json => {
            let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_target(true)
                        .with_current_span(true),
                )
                .init();
            Ok(Some(guard))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_values() {
        assert_eq!(LogFormat::from_str("json", true).unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("PRETTY", true).unwrap(), LogFormat::Pretty);
        assert!(LogFormat::from_str("xml", true).is_err());
        assert_eq!(LogFormat::default(), LogFormat::Compact);
    }
}
