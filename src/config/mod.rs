//! Raw environment loading
//!
//! Supplies the field-name to raw-string mapping the schema subsystem
//! validates. Reads the process environment and an optional dotenv file.

mod loader;
mod raw;

pub use loader::{ConfigError, ConfigResult, EnvLoader, DEFAULT_ENV_FILE};
pub use raw::RawConfig;
