//! Configuration system for markpane.
//!
//! This crate provides configuration loading, saving, and default values
//! for the document layout core and its command-line tool:
//!
//! - [`Config`]: user settings (log level, session file location, restore policy)
//! - [`LogLevel`]: verbosity setting mapped onto `log::LevelFilter`
//! - [`ConfigError`]: typed failures of config I/O and validation

mod config;
mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
