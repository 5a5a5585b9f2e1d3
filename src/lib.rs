//! bridge-env - Strict, mode-aware validation of token bridge deployment environments
//!
//! The deployment environment is a flat set of string variables. Which
//! variables are required, and how each must be shaped, depends on
//! `BRIDGE_MODE`. This crate derives that schema and validates the
//! environment against it, reporting every failure in one pass.

pub mod cli;
pub mod config;
pub mod observability;
pub mod schema;

pub use config::{EnvLoader, RawConfig};
pub use schema::{validate_env, BridgeMode, SchemaError, ValidatedConfig};
