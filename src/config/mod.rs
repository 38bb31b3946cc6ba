pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const MIN_DIAMOND_SIZE: i64 = 1;
pub const MAX_DIAMOND_SIZE: i64 = 100;

/// Presentation settings for one calculator session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    pub show_banner: bool,
    pub plain: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_banner: true,
            plain: false,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Interactive four-function calculator")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Skip the header and farewell frames
    #[arg(long)]
    pub no_banner: bool,

    /// Use ASCII markers instead of emoji
    #[arg(long)]
    pub plain: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format (overrides the config file)
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the config file, if any, and applies the command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if self.no_banner {
            config.session.show_banner = false;
        }
        if self.plain {
            config.session.plain = true;
        }
        if let Some(format) = self.log_format {
            config.logging.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "diamond")]
#[command(about = "Print a hollow diamond pattern")]
pub struct DiamondConfig {
    /// Diamond size; prompted for on stdin when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Character used to draw the outline
    #[arg(long, default_value_t = '*')]
    pub fill: char,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for DiamondConfig {
    fn validate(&self) -> Result<()> {
        if let Some(size) = self.size {
            validate_diamond_size(size)?;
        }
        if self.fill.is_whitespace() {
            return Err(crate::utils::error::CalcError::InvalidConfigValueError {
                field: "fill".to_string(),
                value: format!("{:?}", self.fill),
                reason: "Fill character cannot be whitespace".to_string(),
            });
        }
        Ok(())
    }
}

pub fn validate_diamond_size(size: i64) -> Result<()> {
    validate_range("size", size, MIN_DIAMOND_SIZE, MAX_DIAMOND_SIZE)
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = CliConfig::parse_from(["small-calc", "--no-banner", "--plain", "--log-format", "json"]);
        let config = cli.resolve().unwrap();
        assert!(!config.session.show_banner);
        assert!(config.session.plain);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["small-calc"]);
        assert!(cli.validate().is_ok());
        let config = cli.resolve().unwrap();
        assert_eq!(config.session, SessionOptions::default());
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["small-calc", "--config", "/nonexistent/small-calc.toml"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_diamond_config_validation() {
        let ok = DiamondConfig::parse_from(["diamond", "--size", "5"]);
        assert!(ok.validate().is_ok());

        let too_small = DiamondConfig::parse_from(["diamond", "--size", "0"]);
        assert!(too_small.validate().is_err());

        let negative = DiamondConfig::parse_from(["diamond", "--size", "-3"]);
        assert!(negative.validate().is_err());

        let blank_fill = DiamondConfig::parse_from(["diamond", "--fill", " "]);
        assert!(blank_fill.validate().is_err());

        let prompted = DiamondConfig::parse_from(["diamond"]);
        assert_eq!(prompted.size, None);
        assert_eq!(prompted.fill, '*');
        assert!(prompted.validate().is_ok());
    }
}
