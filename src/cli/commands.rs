//! CLI command implementations
//!
//! `check` follows the startup sequence:
//! 1. Load the raw environment (process + env file)
//! 2. Resolve BRIDGE_MODE and derive the schema (FATAL on an unknown mode)
//! 3. Validate every field, reporting all failures at once
//!
//! The validated config is returned to the caller; nothing is stored globally.

use crate::config::{EnvLoader, RawConfig};
use crate::observability::{log_event, Event, Logger};
use crate::schema::{
    derive_schema, BridgeMode, ModeFlags, Schema, SchemaBuilder, SchemaValidator, ValidatedConfig,
};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::write_json;

/// Parse arguments and run the command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Check {
            env_file,
            no_process_env,
            print,
            quiet,
        } => {
            let logger = if quiet { Logger::quiet() } else { Logger::from_env() };

            let mut loader = EnvLoader::new();
            if let Some(path) = env_file {
                loader = loader.env_file(path);
            }
            if no_process_env {
                loader = loader.without_process_env();
            }

            let config = check(&loader, &logger)?;
            if print {
                write_json(&config.to_masked_json())?;
            }
            Ok(())
        }
        Command::Schema {
            mode,
            use_existing_token,
            deploy_rewardable_token,
        } => {
            let flags = ModeFlags {
                use_existing_token,
                deploy_rewardable_token,
            };
            write_json(&schema(&mode, flags)?)
        }
    }
}

/// Load the environment and validate it.
pub fn check(loader: &EnvLoader, logger: &Logger) -> CliResult<ValidatedConfig> {
    let env_file = loader.path().display().to_string();

    let raw = match loader.load() {
        Ok(raw) => raw,
        Err(e) => {
            let reason = e.to_string();
            log_event(
                logger,
                Event::EnvLoadFailed,
                &[("env_file", env_file.as_str()), ("error", reason.as_str())],
            );
            return Err(e.into());
        }
    };

    let vars = raw.len().to_string();
    log_event(
        logger,
        Event::EnvLoaded,
        &[("env_file", env_file.as_str()), ("vars", vars.as_str())],
    );

    check_raw(&raw, logger)
}

/// Validate an already-loaded raw environment.
pub fn check_raw(raw: &RawConfig, logger: &Logger) -> CliResult<ValidatedConfig> {
    let schema = match SchemaBuilder::from_raw(raw) {
        Ok(schema) => schema,
        Err(e) => {
            let value = e.mode().unwrap_or("<unset>").to_string();
            log_event(logger, Event::InvalidMode, &[("value", value.as_str())]);
            return Err(e.into());
        }
    };

    let mode = schema.mode.as_str();
    let field_count = schema.len().to_string();
    log_event(
        logger,
        Event::SchemaDerived,
        &[("fields", field_count.as_str()), ("mode", mode)],
    );

    match SchemaValidator::new(&schema).validate(raw) {
        Ok(config) => {
            log_event(
                logger,
                Event::ValidationComplete,
                &[("fields", field_count.as_str()), ("mode", mode)],
            );
            Ok(config)
        }
        Err(e) => {
            let failed = e
                .report()
                .map(|report| report.fields().join(","))
                .unwrap_or_default();
            log_event(
                logger,
                Event::ValidationFailed,
                &[("failed", failed.as_str()), ("mode", mode)],
            );
            Err(e.into())
        }
    }
}

/// Derive the schema for a mode name without validating anything.
pub fn schema(mode: &str, flags: ModeFlags) -> CliResult<Schema> {
    let mode: BridgeMode = mode.parse()?;
    Ok(derive_schema(mode, flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use crate::schema::keys;

    #[test]
    fn test_check_raw_invalid_mode() {
        let raw = RawConfig::new().with(keys::BRIDGE_MODE, "FOO");
        let err = check_raw(&raw, &Logger::quiet()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidMode);
    }

    #[test]
    fn test_check_raw_reports_every_missing_field() {
        let raw = RawConfig::new().with(keys::BRIDGE_MODE, "ERC_TO_ERC_MULTIPLE");
        let err = check_raw(&raw, &Logger::quiet()).unwrap_err();

        assert_eq!(err.code(), &CliErrorCode::ValidationFailed);
        let report = err.schema_error().unwrap().report().unwrap();
        let expected = schema("ERC_TO_ERC_MULTIPLE", ModeFlags::default()).unwrap().len();
        assert_eq!(report.len(), expected);
    }

    #[test]
    fn test_schema_command() {
        let flags = ModeFlags {
            use_existing_token: true,
            deploy_rewardable_token: false,
        };
        let schema = schema("NATIVE_TO_ERC", flags).unwrap();
        assert!(schema.contains(keys::BRIDGEABLE_TOKEN_ADDRESS));

        assert!(super::schema("nope", ModeFlags::default()).is_err());
    }
}
