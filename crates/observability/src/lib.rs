//! Tracing/logging setup shared by binaries and test harnesses.
//!
//! Library crates in this workspace only emit `tracing` events; installing a
//! subscriber is the job of whoever owns the process.

/// Initialize process-wide tracing/logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
/// An unrecognized `CAMBIO_LOG_FORMAT` falls back to json and is reported as
/// a warning once the subscriber is up.
pub fn init() {
    let (config, rejected) = tracing::LogConfig::from_env();
    tracing::init_with(config);

    if let Some(err) = rejected {
        ::tracing::warn!(error = %err, "falling back to json log format");
    }
}

/// Subscriber configuration and installation.
pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, UnknownLogFormat, init_with};
