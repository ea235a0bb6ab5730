//! Tracing/logging initialization.
//!
//! `RUST_LOG` selects the filter (default `info`); `CAMBIO_LOG_FORMAT` selects
//! the output format (`json` by default, `pretty` or `compact`). An unknown
//! format name falls back to json; [`crate::init`] reports it as a warning
//! through the installed subscriber.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log output format.
pub const LOG_FORMAT_ENV: &str = "CAMBIO_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0} (expected json, pretty or compact)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `info,cambio_money=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Read the config from the environment.
    ///
    /// An unknown format name falls back to json; the rejection is handed back
    /// so the caller can report it once logging is up.
    pub fn from_env() -> (Self, Option<UnknownLogFormat>) {
        Self::resolve(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn resolve(filter: Option<String>, format: Option<String>) -> (Self, Option<UnknownLogFormat>) {
        let defaults = Self::default();
        let (format, rejected) = match format.map(|raw| raw.parse::<LogFormat>()) {
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::Json, Some(err)),
            None => (defaults.format, None),
        };
        let config = Self {
            filter: filter.filter(|f| !f.trim().is_empty()).unwrap_or(defaults.filter),
            format,
        };
        (config, rejected)
    }
}

/// Install a global subscriber for `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init_with(config: LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
}
