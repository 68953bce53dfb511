//! fhe-scaffold CLI: generate, deploy and document FHE Solidity examples.
//!
//! Five commands: `category` and `example` scaffold Hardhat projects from the
//! built-in catalog, `deploy` ships a compiled contract to an EVM network,
//! `docs` renders Markdown API pages from NatSpec comments and `list` prints the
//! catalog.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use fhe_scaffold_core::catalog::CategoryKey;
use fhe_scaffold_core::project::{DEFAULT_DESCRIPTION, DEFAULT_NAME};

#[derive(Parser)]
#[command(
    name = "fhe-scaffold",
    about = "Scaffolding, deployment and docs for FHEVM example contracts",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every example of a catalog category
    Category {
        /// Category key (omit to list the available categories)
        #[arg(long, short)]
        category: Option<String>,

        /// Directory the `fhevm-<category>-examples` tree is created in
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Generate a standalone Hardhat project for one example
    Example {
        /// Example name (the project directory is its lower-cased form)
        #[arg(long, default_value = DEFAULT_NAME)]
        name: String,

        /// Catalog category the example belongs to
        #[arg(long, value_enum, default_value = "basic")]
        category: CategoryChoice,

        #[arg(long, default_value = DEFAULT_DESCRIPTION)]
        description: String,

        /// Solidity contract name (default: PascalCase of --name)
        #[arg(long)]
        contract_name: Option<String>,

        /// Feature bullet for the README (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,

        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Deploy a compiled contract and record the deployment
    Deploy {
        /// Contract name as it appears in the compiler artifacts
        #[arg(long)]
        contract: String,

        /// Target network (hardhat, localhost, sepolia, ethereum)
        #[arg(long, default_value = "sepolia")]
        network: String,

        /// Hardhat artifacts directory
        #[arg(long, default_value = "artifacts")]
        artifacts: PathBuf,

        /// Where to write the deployment record
        #[arg(long, default_value = fhe_scaffold_core::deployment::DEPLOYMENT_FILE)]
        output: PathBuf,

        /// Deployer private key
        #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
        private_key: Option<String>,
    },

    /// Generate Markdown API docs from NatSpec comments
    Docs {
        /// Directory holding the `.sol` sources
        #[arg(long, default_value = "contracts")]
        contracts: PathBuf,

        /// Output directory for the generated pages
        #[arg(long, default_value = "docs")]
        out: PathBuf,
    },

    /// List every category and its examples
    List,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum CategoryChoice {
    Basic,
    Encryption,
    Decryption,
    AccessControl,
    Advanced,
}

impl CategoryChoice {
    pub fn key(&self) -> CategoryKey {
        match self {
            Self::Basic => CategoryKey::Basic,
            Self::Encryption => CategoryKey::Encryption,
            Self::Decryption => CategoryKey::Decryption,
            Self::AccessControl => CategoryKey::AccessControl,
            Self::Advanced => CategoryKey::Advanced,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Before parsing, so `env = ...` arguments see values from .env
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Commands return their errors unprinted; this is the one place they are reported
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Category {
            category,
            output_dir,
        } => {
            commands::category::run(category.as_deref(), &output_dir)?;
        }
        Commands::Example {
            name,
            category,
            description,
            contract_name,
            features,
            output_dir,
        } => {
            commands::example::run(
                &name,
                &category,
                &description,
                contract_name,
                features,
                &output_dir,
            )?;
        }
        Commands::Deploy {
            contract,
            network,
            artifacts,
            output,
            private_key,
        } => {
            commands::deploy::run(&contract, &network, &artifacts, &output, private_key).await?;
        }
        Commands::Docs { contracts, out } => {
            commands::docs::run(&contracts, &out)?;
        }
        Commands::List => commands::list::run(),
    }

    Ok(())
}
