//! Environment variable names.

pub const BRIDGE_MODE: &str = "BRIDGE_MODE";
pub const USE_EXISTING_TOKEN: &str = "USE_EXISTING_TOKEN";
pub const DEPLOY_REWARDABLE_TOKEN: &str = "DEPLOY_REWARDABLE_TOKEN";

// Deployment
pub const DEPLOYMENT_ACCOUNT_PRIVATE_KEY: &str = "DEPLOYMENT_ACCOUNT_PRIVATE_KEY";
pub const DEPLOYMENT_GAS_LIMIT: &str = "DEPLOYMENT_GAS_LIMIT";
pub const HOME_DEPLOYMENT_GAS_PRICE: &str = "HOME_DEPLOYMENT_GAS_PRICE";
pub const FOREIGN_DEPLOYMENT_GAS_PRICE: &str = "FOREIGN_DEPLOYMENT_GAS_PRICE";
pub const GET_RECEIPT_INTERVAL_IN_MILLISECONDS: &str = "GET_RECEIPT_INTERVAL_IN_MILLISECONDS";

// Home chain
pub const HOME_RPC_URL: &str = "HOME_RPC_URL";
pub const HOME_BRIDGE_OWNER: &str = "HOME_BRIDGE_OWNER";
pub const HOME_UPGRADEABLE_ADMIN: &str = "HOME_UPGRADEABLE_ADMIN";
pub const HOME_DAILY_LIMIT: &str = "HOME_DAILY_LIMIT";
pub const HOME_MAX_AMOUNT_PER_TX: &str = "HOME_MAX_AMOUNT_PER_TX";
pub const HOME_MIN_AMOUNT_PER_TX: &str = "HOME_MIN_AMOUNT_PER_TX";
pub const HOME_REQUIRED_BLOCK_CONFIRMATIONS: &str = "HOME_REQUIRED_BLOCK_CONFIRMATIONS";
pub const HOME_GAS_PRICE: &str = "HOME_GAS_PRICE";

// Foreign chain
pub const FOREIGN_RPC_URL: &str = "FOREIGN_RPC_URL";
pub const FOREIGN_BRIDGE_OWNER: &str = "FOREIGN_BRIDGE_OWNER";
pub const FOREIGN_UPGRADEABLE_ADMIN: &str = "FOREIGN_UPGRADEABLE_ADMIN";
pub const FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS: &str = "FOREIGN_REQUIRED_BLOCK_CONFIRMATIONS";
pub const FOREIGN_GAS_PRICE: &str = "FOREIGN_GAS_PRICE";

pub const VALIDATORS: &str = "VALIDATORS";

// NATIVE_TO_ERC
pub const HOME_CONSENSUS_ADDRESS: &str = "HOME_CONSENSUS_ADDRESS";
pub const FOREIGN_DAILY_LIMIT: &str = "FOREIGN_DAILY_LIMIT";
pub const FOREIGN_MAX_AMOUNT_PER_TX: &str = "FOREIGN_MAX_AMOUNT_PER_TX";
pub const FOREIGN_MIN_AMOUNT_PER_TX: &str = "FOREIGN_MIN_AMOUNT_PER_TX";
pub const BRIDGEABLE_TOKEN_ADDRESS: &str = "BRIDGEABLE_TOKEN_ADDRESS";
pub const BRIDGEABLE_TOKEN_NAME: &str = "BRIDGEABLE_TOKEN_NAME";
pub const BRIDGEABLE_TOKEN_SYMBOL: &str = "BRIDGEABLE_TOKEN_SYMBOL";
pub const BRIDGEABLE_TOKEN_DECIMALS: &str = "BRIDGEABLE_TOKEN_DECIMALS";
pub const BRIDGEABLE_TOKEN_PRE_MINTED: &str = "BRIDGEABLE_TOKEN_PRE_MINTED";
pub const BRIDGEABLE_TOKEN_INITIAL_SUPPLY_ETH: &str = "BRIDGEABLE_TOKEN_INITIAL_SUPPLY_ETH";
pub const DPOS_VALIDATOR_SET_ADDRESS: &str = "DPOS_VALIDATOR_SET_ADDRESS";
pub const BLOCK_REWARD_ADDRESS: &str = "BLOCK_REWARD_ADDRESS";

// ERC_TO_* modes
pub const HOME_VALIDATORS_OWNER: &str = "HOME_VALIDATORS_OWNER";
pub const FOREIGN_VALIDATORS_OWNER: &str = "FOREIGN_VALIDATORS_OWNER";
pub const REQUIRED_NUMBER_OF_VALIDATORS: &str = "REQUIRED_NUMBER_OF_VALIDATORS";
pub const ERC20_TOKEN_ADDRESS: &str = "ERC20_TOKEN_ADDRESS";
pub const HOME_FACTORY_OWNER: &str = "HOME_FACTORY_OWNER";
pub const HOME_MAPPER_OWNER: &str = "HOME_MAPPER_OWNER";
pub const FOREIGN_FACTORY_OWNER: &str = "FOREIGN_FACTORY_OWNER";
