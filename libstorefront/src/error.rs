//! Error types for Storefront

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StorefrontError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StorefrontError::InvalidInput(_) => 3,
            StorefrontError::Fetch(_) => 2,
            StorefrontError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog endpoint returned HTTP {0}")]
    Status(u16),

    #[error("Malformed catalog body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = StorefrontError::InvalidInput("page must be positive".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_fetch_error() {
        let error = StorefrontError::Fetch(FetchError::Status(503));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_config_error() {
        let config_error = ConfigError::MissingField("config directory".to_string());
        let error = StorefrontError::Config(config_error);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = StorefrontError::InvalidInput("page must be positive".to_string());
        assert_eq!(error.to_string(), "Invalid input: page must be positive");
    }

    #[test]
    fn test_error_message_formatting_status() {
        let error = StorefrontError::from(FetchError::Status(404));
        assert_eq!(
            error.to_string(),
            "Catalog fetch error: Catalog endpoint returned HTTP 404"
        );
    }

    #[test]
    fn test_decode_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error: FetchError = parse_err.into();
        assert!(error.to_string().starts_with("Malformed catalog body"));
    }
}
