//! Schema subsystem for bridge-env
//!
//! The schema for a deployment environment is derived from `BRIDGE_MODE`
//! and then enforced on the raw environment in a single pass.
//!
//! # Design Principles
//!
//! - Derivation is a pure function of the mode and two raw flags
//! - An unknown mode is fatal and stops before any field is checked
//! - Every failing field is reported at once
//! - Validation is all-or-nothing and deterministic
//! - Exactly one default exists (`BLOCK_REWARD_ADDRESS` in `ERC_TO_NATIVE`)

mod builder;
mod errors;
mod fields;
pub mod keys;
mod types;
mod validated;
mod validator;

pub use builder::{derive_schema, ModeFlags, SchemaBuilder};
pub use errors::{FieldFailure, SchemaError, SchemaErrorCode, SchemaResult, Severity, ValidationReport};
pub use fields::{
    is_address, is_decimal, parse_address_list, parse_big_integer, parse_boolean, parse_integer, parse_string,
};
pub use types::{Address, BridgeMode, Decimal, FieldKind, FieldSpec, Schema, TypedValue};
pub use validated::{ValidatedConfig, MASK};
pub use validator::{resolve_field, validate_env, SchemaValidator};
