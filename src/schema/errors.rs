//! Schema error types
//!
//! Error codes:
//! - BRIDGE_ENV_INVALID_MODE (FATAL)
//! - BRIDGE_ENV_VALIDATION_FAILED (REJECT)

use std::fmt;

/// Severity levels for schema errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The supplied environment is rejected; every failure is reported
    Reject,
    /// Schema derivation cannot start
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// `BRIDGE_MODE` missing or not a known mode
    BridgeEnvInvalidMode,
    /// One or more fields failed validation
    BridgeEnvValidationFailed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::BridgeEnvInvalidMode => "BRIDGE_ENV_INVALID_MODE",
            SchemaErrorCode::BridgeEnvValidationFailed => "BRIDGE_ENV_VALIDATION_FAILED",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            SchemaErrorCode::BridgeEnvInvalidMode => Severity::Fatal,
            SchemaErrorCode::BridgeEnvValidationFailed => Severity::Reject,
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFailure {
    /// Environment variable name
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl FieldFailure {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, super::fields::REQUIRED)
    }
}

impl fmt::Display for FieldFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Every failure from one validation pass, in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, failure: FieldFailure) {
        self.failures.push(failure);
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Failed field names in report order
    pub fn fields(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.field.as_str()).collect()
    }

    /// Returns the failure for a field, if any
    pub fn get(&self, field: &str) -> Option<&FieldFailure> {
        self.failures.iter().find(|f| f.field == field)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "    {}", failure)?;
        }
        Ok(())
    }
}

/// Schema error type with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    /// Offending `BRIDGE_MODE` value, if one was supplied
    mode: Option<String>,
    report: Option<ValidationReport>,
}

impl SchemaError {
    /// Create an invalid bridge mode error
    pub fn invalid_mode(value: Option<&str>) -> Self {
        Self {
            code: SchemaErrorCode::BridgeEnvInvalidMode,
            message: format!("Invalid bridge mode: {}", value.unwrap_or("<unset>")),
            mode: value.map(str::to_string),
            report: None,
        }
    }

    /// Create a validation failed error from a non-empty report
    pub fn validation_failed(report: ValidationReport) -> Self {
        let noun = if report.len() == 1 { "variable" } else { "variables" };
        Self {
            code: SchemaErrorCode::BridgeEnvValidationFailed,
            message: format!("{} invalid environment {}:\n{}", report.len(), noun, report),
            mode: None,
            report: Some(report),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the rejected mode value, if one was supplied
    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Returns the validation report if applicable
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code.severity(), self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchemaErrorCode::BridgeEnvInvalidMode.code(), "BRIDGE_ENV_INVALID_MODE");
        assert_eq!(
            SchemaErrorCode::BridgeEnvValidationFailed.code(),
            "BRIDGE_ENV_VALIDATION_FAILED"
        );
    }

    #[test]
    fn test_severity_levels() {
        assert_eq!(SchemaErrorCode::BridgeEnvInvalidMode.severity(), Severity::Fatal);
        assert_eq!(SchemaErrorCode::BridgeEnvValidationFailed.severity(), Severity::Reject);
    }

    #[test]
    fn test_invalid_mode_message() {
        let err = SchemaError::invalid_mode(Some("FOO"));
        assert!(err.is_fatal());
        assert_eq!(err.message(), "Invalid bridge mode: FOO");
        assert_eq!(err.mode(), Some("FOO"));
        assert!(err.report().is_none());

        let err = SchemaError::invalid_mode(None);
        assert_eq!(err.message(), "Invalid bridge mode: <unset>");
        assert_eq!(err.mode(), None);
    }

    #[test]
    fn test_validation_failed_lists_every_field() {
        let mut report = ValidationReport::new();
        report.push(FieldFailure::required("HOME_RPC_URL"));
        report.push(FieldFailure::new("HOME_GAS_PRICE", "invalid numeric value: x"));

        let err = SchemaError::validation_failed(report);
        assert!(!err.is_fatal());

        let display = err.to_string();
        assert!(display.starts_with("[REJECT] BRIDGE_ENV_VALIDATION_FAILED: 2 invalid"));
        assert!(display.contains("HOME_RPC_URL: required"));
        assert!(display.contains("HOME_GAS_PRICE: invalid numeric value: x"));
        assert_eq!(err.report().unwrap().fields(), vec!["HOME_RPC_URL", "HOME_GAS_PRICE"]);
    }

    #[test]
    fn test_field_failure_display() {
        let failure = FieldFailure::new("VALIDATORS", "Invalid address: 0x1");
        assert_eq!(failure.to_string(), "VALIDATORS: Invalid address: 0x1");
    }
}
