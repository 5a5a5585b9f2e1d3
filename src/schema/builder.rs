//! Mode-aware schema derivation
//!
//! The schema is a pure function of the bridge mode and two raw flags:
//!
//! 1. `BRIDGE_MODE` must name a known mode, otherwise derivation fails (FATAL)
//! 2. The base fields are always present
//! 3. Each mode adds its own fixed table of fields
//! 4. `NATIVE_TO_ERC` additionally branches on `USE_EXISTING_TOKEN` and
//!    `DEPLOY_REWARDABLE_TOKEN`, read raw and compared to the literal `"true"`

use crate::config::RawConfig;

use super::errors::{SchemaError, SchemaResult};
use super::keys::*;
use super::types::{Address, BridgeMode, FieldSpec, Schema, TypedValue};

/// Branch flags for `NATIVE_TO_ERC`.
///
/// Only the exact string `"true"` enables a branch; `"True"`, `"1"` and
/// anything else leave it off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeFlags {
    pub use_existing_token: bool,
    pub deploy_rewardable_token: bool,
}

impl ModeFlags {
    /// Reads both flags from the raw environment.
    pub fn from_raw(raw: &RawConfig) -> Self {
        Self {
            use_existing_token: raw.get(USE_EXISTING_TOKEN) == Some("true"),
            deploy_rewardable_token: raw.get(DEPLOY_REWARDABLE_TOKEN) == Some("true"),
        }
    }
}

/// Derives schemas from a raw environment.
pub struct SchemaBuilder;

impl SchemaBuilder {
    /// Resolves `BRIDGE_MODE` from the raw environment.
    ///
    /// # Errors
    ///
    /// Returns BRIDGE_ENV_INVALID_MODE if the variable is missing or unknown.
    pub fn mode(raw: &RawConfig) -> SchemaResult<BridgeMode> {
        match raw.get(BRIDGE_MODE) {
            Some(value) => value.parse(),
            None => Err(SchemaError::invalid_mode(None)),
        }
    }

    /// Derives the schema for the raw environment.
    ///
    /// Fails before any field is looked at if the mode is invalid.
    pub fn from_raw(raw: &RawConfig) -> SchemaResult<Schema> {
        let mode = Self::mode(raw)?;
        Ok(derive_schema(mode, ModeFlags::from_raw(raw)))
    }
}

/// Builds the schema for a mode. Flags only matter for `NATIVE_TO_ERC`.
pub fn derive_schema(mode: BridgeMode, flags: ModeFlags) -> Schema {
    let schema = Schema::new(mode, base_fields());

    match mode {
        BridgeMode::NativeToErc => schema.extend(native_to_erc_fields(flags)),
        BridgeMode::ErcToErc => schema.extend(erc_to_erc_fields()),
        BridgeMode::ErcToNative => schema.extend(erc_to_native_fields()),
        BridgeMode::ErcToErcMultiple => schema.extend(erc_to_erc_multiple_fields()),
    }
}

fn base_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::string(DEPLOYMENT_ACCOUNT_PRIVATE_KEY).secret(),
        FieldSpec::big_integer(DEPLOYMENT_GAS_LIMIT),
        FieldSpec::big_integer(HOME_DEPLOYMENT_GAS_PRICE),
        FieldSpec::big_integer(FOREIGN_DEPLOYMENT_GAS_PRICE),
        FieldSpec::big_integer(GET_RECEIPT_INTERVAL_IN_MILLISECONDS),
        FieldSpec::string(HOME_RPC_URL),
        FieldSpec::address(HOME_BRIDGE_OWNER),
        FieldSpec::address(HOME_UPGRADEABLE_ADMIN),
        FieldSpec::big_integer(HOME_DAILY_LIMIT),
        FieldSpec::big_integer(HOME_MAX_AMOUNT_PER_TX),
        FieldSpec::big_integer(HOME_MIN_AMOUNT_PER_TX),
        FieldSpec::integer(HOME_REQUIRED_BLOCK_CONFIRMATIONS),
        FieldSpec::big_integer(HOME_GAS_PRICE),
        FieldSpec::string(FOREIGN_RPC_URL),
        FieldSpec::address(FOREIGN_BRIDGE_OWNER),
        FieldSpec::address(FOREIGN_UPGRADEABLE_ADMIN),
        FieldSpec::integer(FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS),
        FieldSpec::big_integer(FOREIGN_GAS_PRICE),
        FieldSpec::address_list(VALIDATORS),
    ]
}

fn native_to_erc_fields(flags: ModeFlags) -> Vec<FieldSpec> {
    let mut fields = vec![
        FieldSpec::address(HOME_CONSENSUS_ADDRESS),
        FieldSpec::big_integer(FOREIGN_DAILY_LIMIT),
        FieldSpec::big_integer(FOREIGN_MAX_AMOUNT_PER_TX),
        FieldSpec::big_integer(FOREIGN_MIN_AMOUNT_PER_TX),
        FieldSpec::boolean(USE_EXISTING_TOKEN),
        FieldSpec::boolean(DEPLOY_REWARDABLE_TOKEN),
    ];

    if flags.use_existing_token {
        fields.push(FieldSpec::address(BRIDGEABLE_TOKEN_ADDRESS));
    } else {
        fields.extend([
            FieldSpec::string(BRIDGEABLE_TOKEN_NAME),
            FieldSpec::string(BRIDGEABLE_TOKEN_SYMBOL),
            FieldSpec::integer(BRIDGEABLE_TOKEN_DECIMALS),
            FieldSpec::boolean(BRIDGEABLE_TOKEN_PRE_MINTED),
            FieldSpec::decimal(BRIDGEABLE_TOKEN_INITIAL_SUPPLY_ETH),
        ]);
    }

    if flags.deploy_rewardable_token {
        fields.extend([
            FieldSpec::address(DPOS_VALIDATOR_SET_ADDRESS),
            FieldSpec::address(BLOCK_REWARD_ADDRESS),
        ]);
    }

    fields
}

/// Validator ownership fields shared by every ERC_TO_* mode.
fn erc_validator_fields() -> [FieldSpec; 3] {
    [
        FieldSpec::address_list(HOME_VALIDATORS_OWNER),
        FieldSpec::address(FOREIGN_VALIDATORS_OWNER),
        FieldSpec::integer(REQUIRED_NUMBER_OF_VALIDATORS),
    ]
}

fn erc_to_erc_fields() -> Vec<FieldSpec> {
    let mut fields = Vec::from(erc_validator_fields());
    fields.extend([
        FieldSpec::address(ERC20_TOKEN_ADDRESS),
        FieldSpec::string(BRIDGEABLE_TOKEN_NAME),
        FieldSpec::string(BRIDGEABLE_TOKEN_SYMBOL),
        FieldSpec::integer(BRIDGEABLE_TOKEN_DECIMALS),
    ]);
    fields
}

fn erc_to_native_fields() -> Vec<FieldSpec> {
    let mut fields = Vec::from(erc_validator_fields());
    fields.extend([
        FieldSpec::address(ERC20_TOKEN_ADDRESS),
        FieldSpec::address(BLOCK_REWARD_ADDRESS)
            .with_default(TypedValue::Address(Address::zero())),
    ]);
    fields
}

fn erc_to_erc_multiple_fields() -> Vec<FieldSpec> {
    let mut fields = Vec::from(erc_validator_fields());
    fields.extend([
        FieldSpec::address(HOME_FACTORY_OWNER),
        FieldSpec::address(HOME_MAPPER_OWNER),
        FieldSpec::address(FOREIGN_FACTORY_OWNER),
    ]);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldKind;

    const TOKEN_GROUP: [&str; 5] = [
        BRIDGEABLE_TOKEN_NAME,
        BRIDGEABLE_TOKEN_SYMBOL,
        BRIDGEABLE_TOKEN_DECIMALS,
        BRIDGEABLE_TOKEN_PRE_MINTED,
        BRIDGEABLE_TOKEN_INITIAL_SUPPLY_ETH,
    ];

    fn native(use_existing_token: bool, deploy_rewardable_token: bool) -> Schema {
        derive_schema(
            BridgeMode::NativeToErc,
            ModeFlags {
                use_existing_token,
                deploy_rewardable_token,
            },
        )
    }

    #[test]
    fn test_base_fields_in_every_mode() {
        for mode in BridgeMode::ALL {
            let schema = derive_schema(mode, ModeFlags::default());
            for spec in base_fields() {
                assert!(schema.contains(&spec.name), "{} missing in {}", spec.name, mode);
            }
            assert_eq!(schema.names().next(), Some(DEPLOYMENT_ACCOUNT_PRIVATE_KEY));
        }
    }

    #[test]
    fn test_existing_token_branch() {
        let schema = native(true, false);
        assert!(schema.contains(BRIDGEABLE_TOKEN_ADDRESS));
        for name in TOKEN_GROUP {
            assert!(!schema.contains(name));
        }

        let schema = native(false, false);
        assert!(!schema.contains(BRIDGEABLE_TOKEN_ADDRESS));
        for name in TOKEN_GROUP {
            assert!(schema.contains(name));
        }
    }

    #[test]
    fn test_rewardable_branch_is_independent() {
        let schema = native(true, true);
        assert!(schema.contains(BRIDGEABLE_TOKEN_ADDRESS));
        assert!(schema.contains(DPOS_VALIDATOR_SET_ADDRESS));
        assert!(schema.contains(BLOCK_REWARD_ADDRESS));
        assert!(schema.get(BLOCK_REWARD_ADDRESS).unwrap().default.is_none());

        let schema = native(false, false);
        assert!(!schema.contains(DPOS_VALIDATOR_SET_ADDRESS));
        assert!(!schema.contains(BLOCK_REWARD_ADDRESS));
    }

    #[test]
    fn test_native_to_erc_declares_flags_as_booleans() {
        let schema = native(false, false);
        assert_eq!(schema.get(USE_EXISTING_TOKEN).unwrap().kind, FieldKind::Boolean);
        assert_eq!(schema.get(DEPLOY_REWARDABLE_TOKEN).unwrap().kind, FieldKind::Boolean);
    }

    #[test]
    fn test_initial_supply_is_decimal() {
        let schema = native(false, false);
        assert_eq!(
            schema.get(BRIDGEABLE_TOKEN_INITIAL_SUPPLY_ETH).unwrap().kind,
            FieldKind::Decimal
        );
        assert_eq!(schema.get(BRIDGEABLE_TOKEN_DECIMALS).unwrap().kind, FieldKind::Integer);
    }

    #[test]
    fn test_flags_ignored_outside_native_to_erc() {
        let on = ModeFlags {
            use_existing_token: true,
            deploy_rewardable_token: true,
        };
        for mode in [BridgeMode::ErcToErc, BridgeMode::ErcToNative, BridgeMode::ErcToErcMultiple] {
            assert_eq!(derive_schema(mode, on), derive_schema(mode, ModeFlags::default()));
            assert!(!derive_schema(mode, on).contains(USE_EXISTING_TOKEN));
        }
    }

    #[test]
    fn test_erc_to_native_block_reward_default() {
        let schema = derive_schema(BridgeMode::ErcToNative, ModeFlags::default());
        let spec = schema.get(BLOCK_REWARD_ADDRESS).unwrap();
        assert_eq!(spec.default, Some(TypedValue::Address(Address::zero())));
    }

    #[test]
    fn test_erc_to_erc_multiple_fields() {
        let schema = derive_schema(BridgeMode::ErcToErcMultiple, ModeFlags::default());
        assert!(schema.contains(HOME_FACTORY_OWNER));
        assert!(schema.contains(HOME_MAPPER_OWNER));
        assert!(schema.contains(FOREIGN_FACTORY_OWNER));
        assert!(!schema.contains(ERC20_TOKEN_ADDRESS));
        assert_eq!(schema.get(HOME_VALIDATORS_OWNER).unwrap().kind, FieldKind::AddressList);
    }

    #[test]
    fn test_field_counts() {
        let base = base_fields().len();
        assert_eq!(base, 19);
        assert_eq!(native(false, false).len(), base + 6 + 5);
        assert_eq!(native(true, true).len(), base + 6 + 1 + 2);
        assert_eq!(derive_schema(BridgeMode::ErcToErc, ModeFlags::default()).len(), base + 7);
        assert_eq!(derive_schema(BridgeMode::ErcToNative, ModeFlags::default()).len(), base + 5);
        assert_eq!(
            derive_schema(BridgeMode::ErcToErcMultiple, ModeFlags::default()).len(),
            base + 6
        );
    }

    #[test]
    fn test_flags_from_raw_are_literal() {
        let raw = RawConfig::new()
            .with(USE_EXISTING_TOKEN, "True")
            .with(DEPLOY_REWARDABLE_TOKEN, "1");
        assert_eq!(ModeFlags::from_raw(&raw), ModeFlags::default());

        let raw = RawConfig::new()
            .with(USE_EXISTING_TOKEN, "true")
            .with(DEPLOY_REWARDABLE_TOKEN, "true");
        let flags = ModeFlags::from_raw(&raw);
        assert!(flags.use_existing_token);
        assert!(flags.deploy_rewardable_token);
    }

    #[test]
    fn test_from_raw_rejects_bad_mode() {
        let err = SchemaBuilder::from_raw(&RawConfig::new().with(BRIDGE_MODE, "FOO")).unwrap_err();
        assert!(err.is_fatal());

        let err = SchemaBuilder::from_raw(&RawConfig::new().with(BRIDGE_MODE, "")).unwrap_err();
        assert!(err.is_fatal());

        let err = SchemaBuilder::from_raw(&RawConfig::new()).unwrap_err();
        assert_eq!(err.message(), "Invalid bridge mode: <unset>");
    }
}
