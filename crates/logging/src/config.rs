//! # Logging Configuration
//!
//! Configuration for the logging subsystem. Values come from the `ANVIL_*`
//! environment variables, with programmatic defaults as fallback.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, Registry};

/// Logging configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format (json, pretty, compact)
    #[serde(default = "default_format")]
    pub format: String,

    /// Optional log file path
    #[serde(default)]
    pub log_file: Option<String>,
}

fn default_level() -> String { "info".to_string() }

fn default_format() -> String { "json".to_string() }

impl LoggingConfig {
    /// Create configuration from environment variables, falling back to the
    /// provided defaults.
    pub fn from_env(level: &str, format: &str, log_file: Option<&str>) -> Self {
        Self {
            level: std::env::var("RUST_LOG")
                .ok()
                .unwrap_or_else(|| level.to_string()),
            format: std::env::var("ANVIL_LOG_FORMAT")
                .ok()
                .unwrap_or_else(|| format.to_string()),
            log_file: std::env::var("ANVIL_LOG_FILE")
                .ok()
                .or(log_file.map(|s| s.to_string())),
        }
    }

    /// Build the tracing subscriber from this configuration.
    ///
    /// The returned guard, present when a log file is configured, owns the
    /// file writer's background worker; dropping it flushes and stops file
    /// output, so the caller must keep it alive for the process lifetime.
    pub fn build(&self) -> (Box<dyn tracing::Subscriber + Send + Sync>, Option<WorkerGuard>) {
        let level: LevelFilter = self.level.parse().unwrap_or(LevelFilter::INFO);

        match self.format.as_str() {
            "pretty" => {
                (
                    Box::new(Registry::default().with(level).with(fmt::layer().pretty())),
                    None,
                )
            },
            "compact" => {
                (
                    Box::new(Registry::default().with(level).with(fmt::layer().compact())),
                    None,
                )
            },
            _ => self.build_json_subscriber(level),
        }
    }

    /// Build a JSON subscriber for production logging, with an optional
    /// hourly-rolling file layer.
    fn build_json_subscriber(
        &self,
        level: LevelFilter,
    ) -> (Box<dyn tracing::Subscriber + Send + Sync>, Option<WorkerGuard>) {
        let stdout_layer = fmt::layer().json();

        if let Some(ref log_file) = self.log_file {
            let path = PathBuf::from(log_file);
            let file_appender = tracing_appender::rolling::hourly(
                path.parent().unwrap_or(&PathBuf::from(".")),
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .as_ref(),
            );
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = fmt::layer().json().with_writer(non_blocking);
            (
                Box::new(
                    Registry::default()
                        .with(level)
                        .with(stdout_layer)
                        .with(file_layer),
                ),
                Some(guard),
            )
        }
        else {
            (
                Box::new(Registry::default().with(level).with(stdout_layer)),
                None,
            )
        }
    }
}
