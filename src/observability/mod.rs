//! Observability for bridge-env
//!
//! Structured one-line JSON logs of the check lifecycle. Logging is
//! read-only: it never changes the outcome of a check.
//!
//! # Usage
//!
//! ```ignore
//! use bridge_env::observability::{log_event, Event, Logger};
//!
//! let logger = Logger::from_env();
//! log_event(&logger, Event::SchemaDerived, &[("mode", "ERC_TO_NATIVE")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Severity an event is logged at
pub fn event_severity(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event == Event::ValidationFailed {
        Severity::Error
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event(logger: &Logger, event: Event, fields: &[(&str, &str)]) {
    logger.log(event_severity(event), event.as_str(), fields);
}
