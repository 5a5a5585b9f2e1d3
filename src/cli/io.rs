//! Output handling for the CLI
//!
//! - Results: pretty JSON on stdout
//! - Failures: human-readable report on stderr
//! - UTF-8 only

use std::io::{self, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Write a value as pretty JSON followed by a newline
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a value as pretty JSON to stdout
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

/// Write the failure report for `error`
pub fn write_failure_to<W: Write>(writer: &mut W, error: &CliError) -> io::Result<()> {
    writeln!(writer, "{}", error)?;
    writer.flush()
}

/// Write the failure report to stderr
pub fn write_failure(error: &CliError) {
    // Nothing useful left to do if stderr is gone
    let _ = write_failure_to(&mut io::stderr().lock(), error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldFailure, SchemaError, ValidationReport};

    #[test]
    fn test_write_json_to() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &serde_json::json!({ "mode": "ERC_TO_ERC" })).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["mode"], "ERC_TO_ERC");
    }

    #[test]
    fn test_failure_report_lists_fields() {
        let mut report = ValidationReport::new();
        report.push(FieldFailure::required("HOME_RPC_URL"));
        report.push(FieldFailure::new("VALIDATORS", "Invalid address: 0x1"));
        let error: CliError = SchemaError::validation_failed(report).into();

        let mut buffer = Vec::new();
        write_failure_to(&mut buffer, &error).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("BRIDGE_ENV_CLI_VALIDATION_FAILED: 2 invalid"));
        assert!(output.contains("    HOME_RPC_URL: required\n"));
        assert!(output.contains("    VALIDATORS: Invalid address: 0x1"));
    }
}
