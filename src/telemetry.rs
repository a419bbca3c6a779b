//! Tracing subscriber setup
//!
//! The library itself only emits `tracing` events. Binaries and demos call one
//! of the `init_*` functions here to install a subscriber.
//!
//! ```rust,ignore
//! use json_http_client::telemetry::{init_subscriber, OutputFormat, SubscriberConfig};
//!
//! let _guard = init_subscriber(
//!     SubscriberConfig::builder()
//!         .log_level(tracing::Level::DEBUG)
//!         .output_format(OutputFormat::Json)
//!         .build(),
//! )?;
//! ```

use crate::defaults::env;
use crate::error::{JsonHttpError, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact JSON format
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = JsonHttpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "json-compact" => Ok(OutputFormat::JsonCompact),
            other => Err(JsonHttpError::TelemetryInit(format!(
                "Invalid log format: {other}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Configuration for tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to a file instead of stdout when set
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }

    /// Env filter directive for this crate and the demo binaries.
    pub fn filter_directive(&self) -> String {
        let level = level_str(self.log_level);
        format!("json_http_client={level},weather_console={level},weather_typed={level}")
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self> {
        let level = level.parse::<tracing::Level>().map_err(|_| {
            JsonHttpError::TelemetryInit(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            log_file: self.log_file,
        }
    }
}

fn level_str(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "trace",
        tracing::Level::DEBUG => "debug",
        tracing::Level::INFO => "info",
        tracing::Level::WARN => "warn",
        tracing::Level::ERROR => "error",
    }
}

/// Install a global subscriber.
///
/// Output goes through a non-blocking writer; keep the returned guard alive
/// for the lifetime of the program so buffered lines are flushed. If a
/// subscriber is already installed, nothing changes and `Ok(None)` is
/// returned.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(config.filter_directive());

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let file_name = path.file_name().ok_or_else(|| {
                JsonHttpError::TelemetryInit(format!("Invalid log file path: {}", path.display()))
            })?;
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, Some(guard))
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            (writer, Some(guard))
        }
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);

    let init_result = match config.output_format {
        OutputFormat::Json => builder.json().try_init(),
        OutputFormat::JsonCompact => builder.json().flatten_event(true).try_init(),
        OutputFormat::Text => builder.try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("global default trace dispatcher has already been set") {
                Ok(None)
            } else {
                Err(JsonHttpError::TelemetryInit(format!(
                    "Failed to initialize tracing: {e}"
                )))
            }
        }
    }
}

/// Initialize tracing subscriber with default configuration
pub fn init_default() -> Result<Option<WorkerGuard>> {
    init_subscriber(SubscriberConfig::default())
}

/// Initialize tracing subscriber from environment variables
///
/// - `JSON_HTTP_LOG_LEVEL`: trace, debug, info, warn, error
/// - `JSON_HTTP_LOG_FORMAT`: text, json, json-compact
/// - `JSON_HTTP_LOG_FILE`: log file path
pub fn init_from_env() -> Result<Option<WorkerGuard>> {
    init_subscriber(config_from_env()?)
}

fn config_from_env() -> Result<SubscriberConfig> {
    config_from_lookup(|key| std::env::var(key).ok())
}

fn config_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<SubscriberConfig> {
    let mut builder = SubscriberConfig::builder();

    if let Some(level) = lookup(env::LOG_LEVEL) {
        builder = builder.log_level_str(&level)?;
    }
    if let Some(format) = lookup(env::LOG_FORMAT) {
        builder = builder.output_format(format.parse()?);
    }
    if let Some(file) = lookup(env::LOG_FILE) {
        builder = builder.log_file(PathBuf::from(file));
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn builder_defaults() {
        let config = SubscriberConfig::builder().build();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn invalid_level_is_rejected() {
        let err = SubscriberConfig::builder().log_level_str("loud").unwrap_err();
        assert!(matches!(err, JsonHttpError::TelemetryInit(_)));
    }

    #[test]
    fn env_lookup_populates_config() {
        let config = config_from_lookup(lookup(&[
            (env::LOG_LEVEL, "debug"),
            (env::LOG_FORMAT, "json-compact"),
            (env::LOG_FILE, "/tmp/json-http.log"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.output_format, OutputFormat::JsonCompact);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/json-http.log")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let err = config_from_lookup(lookup(&[(env::LOG_FORMAT, "xml")])).unwrap_err();
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn filter_covers_crate_target() {
        let config = SubscriberConfig::debug();
        assert!(config.filter_directive().starts_with("json_http_client=debug"));
    }
}
