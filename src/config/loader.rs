//! Builds the raw environment from the process and a dotenv file
//!
//! Precedence follows dotenv: a variable already set in the process
//! environment is never overridden by the file. The file is parsed into
//! memory only; the process environment is not modified.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::raw::RawConfig;

/// Default dotenv file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Result type for loader operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Loader errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Env file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read env file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("Malformed env file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Loads a [`RawConfig`].
#[derive(Debug, Clone)]
pub struct EnvLoader {
    env_file: PathBuf,
    /// A missing file is an error only when the path was given explicitly
    explicit: bool,
    include_process_env: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            explicit: false,
            include_process_env: true,
        }
    }
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` instead of `./.env`; it must exist.
    pub fn env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = path.into();
        self.explicit = true;
        self
    }

    /// Ignore the process environment and read the file only.
    pub fn without_process_env(mut self) -> Self {
        self.include_process_env = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.env_file
    }

    /// Loads the process environment merged with the env file.
    pub fn load(&self) -> ConfigResult<RawConfig> {
        let process = if self.include_process_env {
            RawConfig::from_process_env()
        } else {
            RawConfig::new()
        };
        self.load_over(process)
    }

    /// Merges the env file under an already-captured environment.
    pub fn load_over(&self, mut base: RawConfig) -> ConfigResult<RawConfig> {
        if let Some(file_vars) = self.read_file()? {
            base.merge_missing(file_vars);
        }
        Ok(base)
    }

    /// Parses the env file. `Ok(None)` when the default file is absent.
    fn read_file(&self) -> ConfigResult<Option<Vec<(String, String)>>> {
        let iter = match dotenvy::from_path_iter(&self.env_file) {
            Ok(iter) => iter,
            Err(e) if e.not_found() && !self.explicit => return Ok(None),
            Err(e) if e.not_found() => return Err(ConfigError::NotFound(self.env_file.clone())),
            Err(e) => return Err(self.convert(e)),
        };

        let mut vars = Vec::new();
        for item in iter {
            vars.push(item.map_err(|e| self.convert(e))?);
        }
        Ok(Some(vars))
    }

    fn convert(&self, error: dotenvy::Error) -> ConfigError {
        let path = self.env_file.clone();
        match error {
            dotenvy::Error::LineParse(line, index) => ConfigError::Parse {
                path,
                message: format!("cannot parse '{}' at position {}", line, index),
            },
            other => ConfigError::Read {
                path,
                message: other.to_string(),
            },
        }
    }
}
