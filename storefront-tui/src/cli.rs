//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use libstorefront::logging::{env_overrides, LogFormat, LoggingConfig};
use libstorefront::{Config, Result};

#[derive(Parser, Debug)]
#[command(name = "storefront-tui")]
#[command(version, about = "Browse a product catalog and manage a cart in the terminal")]
#[command(long_about = r#"Browse a product catalog and manage a cart in the terminal.

The catalog is fetched once at startup and paged client-side, five
products per page. The cart lives in memory for the session only.

EXAMPLES:
    # Interactive mode
    storefront-tui

    # Use another catalog endpoint
    storefront-tui --endpoint http://localhost:8080/products

    # Keep a debug log while the TUI runs
    storefront-tui --log-file ~/storefront.log --log-level debug

    # Print page 2 and exit
    storefront-tui --print --page 2

EXIT CODES:
    0 - Success
    1 - Configuration or terminal error
    2 - Catalog fetch failed (--print only)
    3 - Invalid input
"#)]
pub struct Cli {
    /// Configuration file (default: ~/.config/storefront/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog endpoint, overrides the config file
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log output format: text, json or pretty
    #[arg(long, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Minimum log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print one catalog page to stdout instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Page to print with --print
    #[arg(long, default_value = "1", value_name = "N")]
    pub page: usize,
}

impl Cli {
    /// Load the config file and apply command-line overrides
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };

        if let Some(endpoint) = &self.endpoint {
            config.catalog.endpoint = endpoint.clone();
        }
        if let Some(format) = self.log_format {
            config.logging.format = format.to_string();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.display().to_string());
        }

        Ok(config)
    }

    /// Logging setup for this run
    ///
    /// Returns `None` in interactive mode without a log file: the terminal
    /// belongs to the TUI, so there is nowhere to write.
    pub fn logging_config(&self, config: &Config) -> Option<LoggingConfig> {
        let format = config.logging.format.parse().unwrap_or(LogFormat::Text);
        let (format, level) = env_overrides(format, config.logging.level.clone());
        let logging = LoggingConfig::new(format, level, self.verbose);

        match config.log_file() {
            Some(path) => Some(logging.with_file(path)),
            None if self.print => Some(logging),
            None => None,
        }
    }
}
