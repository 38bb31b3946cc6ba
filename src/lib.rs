pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, DiamondConfig};

pub use adapters::input::LineTokenReader;
pub use config::{toml_config::TomlConfig, SessionOptions};
pub use crate::core::diamond::render_hollow_diamond;
pub use crate::core::session::{Session, SessionEnd, SessionState, SessionSummary};
pub use utils::error::{CalcError, Result};
