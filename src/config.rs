//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the CLI
//! touches the registry.
//!
//! ## Variables
//!
//! ```bash
//! export CODE_LENGTH="6"     # Generated short code length (default: 6)
//! export RUST_LOG="info"     # Log level (default: info)
//! export LOG_FORMAT="text"   # Log format: text or json (default: text)
//! ```
//!
//! All variables are optional; defaults apply when unset.

use anyhow::Result;
use std::env;

use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Upper bound for `CODE_LENGTH`.
const MAX_CODE_LENGTH: usize = 32;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of generated short codes (`CODE_LENGTH`, default: 6).
    pub code_length: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            code_length,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `code_length` is zero or larger than 32
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.code_length == 0 {
            anyhow::bail!("CODE_LENGTH must be at least 1");
        }

        if self.code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "CODE_LENGTH is too large (max: {}), got {}",
                MAX_CODE_LENGTH,
                self.code_length
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            code_length: 6,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        assert!(config.validate().is_ok());

        // Test invalid code length
        config.code_length = 0;
        assert!(config.validate().is_err());

        config.code_length = 64;
        assert!(config.validate().is_err());

        config.code_length = 6;

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults_when_env_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("CODE_LENGTH");
            env::remove_var("RUST_LOG");
            env::remove_var("LOG_FORMAT");
        }

        let config = Config::from_env();

        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_code_length_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CODE_LENGTH", "8");
        }

        let config = Config::from_env();
        assert_eq!(config.code_length, 8);

        // Cleanup
        unsafe {
            env::remove_var("CODE_LENGTH");
        }
    }

    #[test]
    #[serial]
    fn test_unparsable_code_length_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CODE_LENGTH", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);

        // Cleanup
        unsafe {
            env::remove_var("CODE_LENGTH");
        }
    }
}
