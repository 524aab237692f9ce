//! Utilities for logging.

use std::str::FromStr;

use quack_error::{DbError, Result, ResultExt};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    HumanReadable,
    Json,
}

impl FromStr for LogFormat {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "pretty" => Ok(LogFormat::HumanReadable),
            "json" => Ok(LogFormat::Json),
            other => Err(DbError::new("Unknown log format").with_field("format", other)),
        }
    }
}

/// Configure a global subscriber writing to stderr.
///
/// `directives` uses the `EnvFilter` syntax (e.g. "debug" or "quack=trace").
///
/// Returns `Ok(false)` if some other subscriber was already installed. We're
/// running inside of a host process, so that's not treated as an error.
pub fn configure_global_logger(directives: &str, format: LogFormat) -> Result<bool> {
    let filter = EnvFilter::try_new(directives)
        .context_fn(|| format!("Invalid log filter '{directives}'"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_ids(true);

    let result = match format {
        LogFormat::HumanReadable => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    Ok(result.is_ok())
}
