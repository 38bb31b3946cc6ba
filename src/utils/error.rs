use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid number for '{field}': {value}")]
    InvalidNumberError { field: String, value: String },
}

impl CalcError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::IoError(e) => format!("Could not read or write the console: {}", e),
            CalcError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            CalcError::ConfigError { message } => format!("Configuration problem: {}", message),
            CalcError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is not acceptable: {}", field, reason)
            }
            CalcError::InvalidNumberError { field, value } => {
                format!("'{}' is not a number (expected for {})", value, field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
