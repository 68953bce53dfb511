use std::path::Path;

use anyhow::{Context, Result};

use fhe_scaffold_chain::deploy::{format_ether, DeployStage, Deployer};
use fhe_scaffold_chain::rpc::AlloyRpc;
use fhe_scaffold_core::artifacts;
use fhe_scaffold_core::config::{DeployEnv, NetworkConfig};
use fhe_scaffold_core::deployment::{explorer_address_url, MIN_DEPLOYER_BALANCE_WEI};

use crate::output;

/// Deploy a compiled contract and write its deployment record.
///
/// Loads the Hardhat artifact, checks the deployer holds at least 0.1 of the
/// native token, deploys with one confirmation, reads back the contract's
/// zero-argument getters and saves `deployment-info.json`.
pub async fn run(
    contract: &str,
    network: &str,
    artifacts_dir: &Path,
    output_path: &Path,
    private_key: Option<String>,
) -> Result<()> {
    output::print_header(&format!("fhe-scaffold deploy: {contract}"));

    let network = NetworkConfig::from_env(network)?;
    let env = DeployEnv {
        private_key: private_key.unwrap_or_default(),
        ..DeployEnv::from_env()
    };

    output::print_step(1, 4, "Loading contract artifact");
    let artifact_path = artifacts::path_for(artifacts_dir, contract);
    let artifact = artifacts::load(&artifact_path).with_context(|| {
        format!("run `npx hardhat compile` first (looked for {})", artifact_path.display())
    })?;
    output::print_key_value("Artifact", &artifact_path.display().to_string());

    output::print_step(2, 4, &format!("Connecting to {}", network.name));
    let key = env.require_private_key()?;
    let rpc = AlloyRpc::connect(&network.rpc_url, key)?;
    output::print_key_value("RPC", &network.rpc_url);

    output::print_step(3, 4, "Deploying contract");
    let deployer = Deployer::new(&rpc, MIN_DEPLOYER_BALANCE_WEI);
    let outcome = deployer.deploy(&network, &artifact, report_stage).await?;

    output::print_step(4, 4, "Saving deployment info");
    outcome.record.save(output_path)?;
    output::print_key_value("Record", &output_path.display().to_string());

    let address = &outcome.record.contract_address;
    output::print_success(&format!("{contract} deployed at {address}"));

    println!();
    println!("  Next steps:");
    if env.etherscan_api_key.is_empty() {
        output::print_warning("ETHERSCAN_API_KEY is not set; verification will fail");
    }
    output::print_command(&format!(
        "npx hardhat verify --network {} {address}",
        network.name
    ));
    println!("  Frontend:");
    output::print_command(&format!("const CONTRACT_ADDRESS = \"{address}\";"));
    println!("  Test against the deployment:");
    output::print_command(&format!("npx hardhat test --network {}", network.name));
    if let Some(url) = explorer_address_url(outcome.record.chain_id, address) {
        println!("  Explorer:");
        output::print_command(&url);
    }
    println!();

    Ok(())
}

fn report_stage(stage: &DeployStage) {
    match stage {
        DeployStage::Connected {
            chain_id,
            deployer,
            balance,
            gas_price,
        } => {
            output::print_key_value("Chain id", &chain_id.to_string());
            output::print_key_value("Deployer", &deployer.to_string());
            output::print_key_value("Balance", &format!("{} ETH", format_ether(*balance)));
            output::print_key_value("Gas price", &format!("{gas_price} wei"));
        }
        DeployStage::Estimated { gas, cost_wei } => {
            output::print_key_value("Estimated gas", &gas.to_string());
            output::print_key_value("Estimated cost", &format!("{} ETH", format_ether(*cost_wei)));
        }
        DeployStage::Submitted { tx_hash } => {
            output::print_key_value("Transaction", &tx_hash.to_string());
        }
        DeployStage::Confirmed {
            address,
            block_number,
        } => {
            output::print_success(&format!("Confirmed in block {block_number}"));
            output::print_key_value("Address", &address.to_string());
        }
        DeployStage::ReadBack(readback) => match &readback.value {
            Ok(value) => output::print_key_value(&readback.function, value),
            Err(e) => output::print_warning(&format!("{}() failed: {e}", readback.function)),
        },
    }
}
