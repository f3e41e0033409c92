//! Centralized logging configuration for the Storefront binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Writing to a log file instead of stderr (the TUI owns the terminal)
//!
//! # Examples
//!
//! ```no_run
//! use libstorefront::logging::{LoggingConfig, LogFormat};
//!
//! // JSON lines appended to a file
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false)
//!     .with_file("/tmp/storefront.log".into());
//! config.init().expect("log file should open");
//!
//! // Or use default settings (respects env vars)
//! libstorefront::logging::init_default();
//! ```

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    /// Append to this file instead of writing to stderr
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new logging configuration
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            file: None,
        }
    }

    /// Send output to `path` (created if missing, appended otherwise)
    pub fn with_file(mut self, path: PathBuf) -> Self {
        self.file = Some(path);
        self
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be opened.
    ///
    /// # Panics
    ///
    /// Panics if the logging subscriber has already been initialized
    pub fn init(&self) -> std::io::Result<()> {
        use tracing_subscriber::EnvFilter;

        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        let (writer, ansi) = match &self.file {
            Some(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                (BoxMakeWriter::new(Mutex::new(file)), false)
            }
            None => (BoxMakeWriter::new(std::io::stderr), true),
        };

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .init();
            }
        }

        Ok(())
    }
}

/// Initialize stderr logging with default settings
///
/// Respects `STOREFRONT_LOG_FORMAT` and `STOREFRONT_LOG_LEVEL` environment variables.
/// Falls back to text format with info level if not set.
///
/// # Examples
///
/// ```bash
/// export STOREFRONT_LOG_FORMAT=json
/// export STOREFRONT_LOG_LEVEL=debug
/// storefront-tui --print
/// ```
pub fn init_default() {
    let (format, level) = env_overrides(LogFormat::Text, "info".to_string());

    // stderr writer cannot fail to open
    let _ = LoggingConfig::new(format, level, false).init();
}

/// Apply `STOREFRONT_LOG_FORMAT` / `STOREFRONT_LOG_LEVEL` on top of the given values
pub fn env_overrides(format: LogFormat, level: String) -> (LogFormat, String) {
    let format = std::env::var("STOREFRONT_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(format);

    let level = std::env::var("STOREFRONT_LOG_LEVEL").unwrap_or(level);

    (format, level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

        // Case insensitive
        assert_eq!("TEXT".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_log_format_from_str_invalid() {
        let result = "xml".parse::<LogFormat>();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid log format: 'xml'"));
    }

    #[test]
    fn test_log_format_display_parses_back() {
        for format in [LogFormat::Text, LogFormat::Json, LogFormat::Pretty] {
            assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_logging_config_with_file() {
        let config = LoggingConfig::new(LogFormat::Json, "debug".to_string(), true)
            .with_file(PathBuf::from("/tmp/storefront.log"));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
        assert!(config.verbose);
        assert_eq!(config.file, Some(PathBuf::from("/tmp/storefront.log")));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("STOREFRONT_LOG_FORMAT", "json");
        std::env::set_var("STOREFRONT_LOG_LEVEL", "trace");
        let (format, level) = env_overrides(LogFormat::Text, "info".to_string());
        std::env::remove_var("STOREFRONT_LOG_FORMAT");
        std::env::remove_var("STOREFRONT_LOG_LEVEL");

        assert_eq!(format, LogFormat::Json);
        assert_eq!(level, "trace");
    }

    #[test]
    #[serial]
    fn test_env_overrides_ignore_bad_format() {
        std::env::set_var("STOREFRONT_LOG_FORMAT", "yaml");
        std::env::remove_var("STOREFRONT_LOG_LEVEL");
        let (format, level) = env_overrides(LogFormat::Pretty, "warn".to_string());
        std::env::remove_var("STOREFRONT_LOG_FORMAT");

        assert_eq!(format, LogFormat::Pretty);
        assert_eq!(level, "warn");
    }
}
