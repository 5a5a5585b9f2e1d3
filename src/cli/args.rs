//! CLI argument definitions using clap
//!
//! Commands:
//! - bridge-env check [--env-file <path>] [--no-process-env] [--print] [--quiet]
//! - bridge-env schema --mode <mode> [--use-existing-token] [--deploy-rewardable-token]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bridge-env - Validate token bridge deployment environments
#[derive(Parser, Debug)]
#[command(name = "bridge-env")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the environment and exit non-zero on any failure
    Check {
        /// Env file merged under the process environment (default: ./.env if present)
        #[arg(long)]
        env_file: Option<PathBuf>,

        /// Read the env file only, ignoring the process environment
        #[arg(long)]
        no_process_env: bool,

        /// Print the validated config as JSON, secrets masked
        #[arg(long)]
        print: bool,

        /// Suppress log lines below FATAL
        #[arg(long, short)]
        quiet: bool,
    },

    /// Print the schema derived for a bridge mode
    Schema {
        /// Bridge mode, e.g. NATIVE_TO_ERC
        #[arg(long)]
        mode: String,

        /// Derive as if USE_EXISTING_TOKEN=true
        #[arg(long)]
        use_existing_token: bool,

        /// Derive as if DEPLOY_REWARDABLE_TOKEN=true
        #[arg(long)]
        deploy_rewardable_token: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
