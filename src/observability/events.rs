//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Lifecycle events of one environment check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Raw environment assembled
    EnvLoaded,
    /// Schema derived for the bridge mode
    SchemaDerived,
    /// Every field passed
    ValidationComplete,
    /// One or more fields failed
    ValidationFailed,
    /// `BRIDGE_MODE` missing or unknown (FATAL)
    InvalidMode,
    /// Env file could not be read (FATAL)
    EnvLoadFailed,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::EnvLoaded => "ENV_LOADED",
            Event::SchemaDerived => "SCHEMA_DERIVED",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::ValidationFailed => "VALIDATION_FAILED",
            Event::InvalidMode => "INVALID_MODE",
            Event::EnvLoadFailed => "ENV_LOAD_FAILED",
        }
    }

    /// Returns true if the event means startup cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::InvalidMode | Event::EnvLoadFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
