// crates/rw_cli/src/telemetry.rs
//
// stderr tracing for `rw`. Filter precedence: --quiet, then RUST_LOG, then
// RW_LOG (via CliConfig).

use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Debug)]
pub enum TelemetryError {
    /// `var` held a directive string `EnvFilter` could not parse.
    Filter { var: &'static str, value: String, source: ParseError },
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::Filter { var, value, source } => {
                write!(f, "{var}={value:?} is not a valid log filter ({source}); logging stays off")
            }
            TelemetryError::AlreadyInstalled(err) => write!(f, "log subscriber already installed: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::Filter { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

/// Pick the filter for this run. A set but unparsable `RUST_LOG` is an error
/// rather than a silent fallback to `RW_LOG`.
pub fn build_filter(rust_log: Option<&str>, rw_log: &str, quiet: bool) -> Result<EnvFilter, TelemetryError> {
    if quiet {
        return Ok(EnvFilter::new("warn"));
    }
    let (var, value) = match rust_log {
        Some(v) if !v.trim().is_empty() => ("RUST_LOG", v),
        _ => ("RW_LOG", rw_log),
    };
    EnvFilter::try_new(value).map_err(|source| TelemetryError::Filter {
        var,
        value: value.to_string(),
        source,
    })
}

/// Install the stderr subscriber.
pub fn init(config: &CliConfig, quiet: bool) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(rust_log.as_deref(), &config.log_filter, quiet)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}
