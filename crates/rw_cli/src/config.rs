//! Environment defaults (`.env` optional). Flags override these.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    Text,
    Json,
    Html,
}

impl FromStr for RenderFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            _ => Err(ConfigError::InvalidRender(value.to_string())),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Html => "html",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub render: RenderFormat,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_filter = lookup("RW_LOG").unwrap_or_else(|| "info".to_string());
        let render = match lookup("RW_RENDER") {
            Some(v) => v.parse()?,
            None => RenderFormat::Text,
        };
        Ok(Self { log_filter, render })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRender(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRender(v) => {
                write!(f, "RW_RENDER must be one of text, json, html (got '{v}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.log_filter, "info");
        assert_eq!(cfg.render, RenderFormat::Text);
    }

    #[test]
    fn reads_overrides() {
        let cfg = CliConfig::from_lookup(|k| match k {
            "RW_LOG" => Some("rw_engine=trace".into()),
            "RW_RENDER" => Some(" HTML ".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.log_filter, "rw_engine=trace");
        assert_eq!(cfg.render, RenderFormat::Html);
    }

    #[test]
    fn rejects_unknown_render() {
        let err = CliConfig::from_lookup(|k| (k == "RW_RENDER").then(|| "pdf".to_string())).unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }
}
