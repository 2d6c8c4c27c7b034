//! Gate Core
//!
//! This crate provides the foundation for the textgate policy gate:
//! error handling, configuration, and logging setup.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::{load_config, load_config_or_default, ClassifierSettings, GateConfig};
pub use error::{CoreError, Result};
pub use logging::init_logging;
