//! Validation engine
//!
//! Validation semantics:
//! - Every field of the schema is checked, in schema order
//! - Failures are collected, never short-circuited
//! - Any failure rejects the whole environment; no partial config is returned
//! - Absent or empty values fall back to the field default, then to
//!   "required" (required fields) or unset (optional fields)
//! - Variables the schema does not declare are ignored
//!
//! Validation is deterministic and does not mutate its inputs.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RawConfig;

use super::builder::SchemaBuilder;
use super::errors::{FieldFailure, SchemaError, SchemaResult, ValidationReport};
use super::types::{FieldSpec, Schema, TypedValue};
use super::validated::ValidatedConfig;

/// Validator that applies a derived schema to a raw environment.
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Creates a new validator for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Returns the schema being enforced
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Validates a raw environment against the schema.
    ///
    /// # Errors
    ///
    /// Returns BRIDGE_ENV_VALIDATION_FAILED carrying every field failure,
    /// in schema order.
    pub fn validate(&self, raw: &RawConfig) -> SchemaResult<ValidatedConfig> {
        let mut values = BTreeMap::new();
        let mut report = ValidationReport::new();

        for spec in self.schema.iter() {
            match resolve_field(spec, raw.get(&spec.name)) {
                Ok(Some(value)) => {
                    values.insert(spec.name.clone(), value);
                }
                Ok(None) => {}
                Err(failure) => report.push(failure),
            }
        }

        if !report.is_empty() {
            return Err(SchemaError::validation_failed(report));
        }

        let secrets: BTreeSet<String> = self
            .schema
            .iter()
            .filter(|spec| spec.secret)
            .map(|spec| spec.name.clone())
            .collect();

        Ok(ValidatedConfig::new(self.schema.mode, values, secrets))
    }
}

/// Resolves one field from its raw value.
///
/// Returns `Ok(None)` for an unset optional field.
pub fn resolve_field(
    spec: &FieldSpec,
    raw: Option<&str>,
) -> Result<Option<TypedValue>, FieldFailure> {
    match raw.filter(|value| !value.is_empty()) {
        Some(value) => spec
            .kind
            .parse(value)
            .map(Some)
            .map_err(|reason| FieldFailure::new(&spec.name, reason)),
        None => match &spec.default {
            Some(default) => Ok(Some(default.clone())),
            None if spec.required => Err(FieldFailure::required(&spec.name)),
            None => Ok(None),
        },
    }
}

/// Derives the schema for `raw` and validates `raw` against it.
///
/// # Errors
///
/// - BRIDGE_ENV_INVALID_MODE (FATAL) before any field is checked
/// - BRIDGE_ENV_VALIDATION_FAILED with the aggregated report
pub fn validate_env(raw: &RawConfig) -> SchemaResult<ValidatedConfig> {
    let schema = SchemaBuilder::from_raw(raw)?;
    SchemaValidator::new(&schema).validate(raw)
}
