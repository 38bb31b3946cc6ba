use crate::config::SessionOptions;
use crate::utils::error::{CalcError, Result};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_log_level, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub session: SessionOptions,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: LogFormat,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CalcError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = &self.logging.level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[session]
show_banner = false
plain = true

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        assert!(!config.session.show_banner);
        assert!(config.session.plain);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[session]\nplain = true\n").unwrap();
        assert!(config.session.show_banner);
        assert!(config.session.plain);
        assert_eq!(config.logging, LoggingConfig::default());

        assert_eq!(TomlConfig::from_toml_str("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            TomlConfig::from_toml_str("[session]\nshow_banner = \"yes\"\n"),
            Err(CalcError::TomlError(_))
        ));
        assert!(TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nshow_banner = false").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert!(!config.session.show_banner);
        assert!(!config.session.plain);
    }

    #[test]
    fn test_from_missing_file() {
        let err = TomlConfig::from_file("/nonexistent/small-calc.toml").unwrap_err();
        assert!(matches!(err, CalcError::ConfigError { .. }));
    }
}
