//! Deployment bookkeeping shared by the CLI and the chain crate.
//!
//! Holds the funding threshold check, the persisted `deployment-info.json`
//! record and block-explorer links. Nothing here talks to a node.

use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{MAINNET_CHAIN_ID, SEPOLIA_CHAIN_ID};
use crate::error::{Result, ScaffoldError};

/// 0.1 native-token units, in wei.
pub const MIN_DEPLOYER_BALANCE_WEI: u128 = 100_000_000_000_000_000;

/// Default location of the deployment record.
pub const DEPLOYMENT_FILE: &str = "deployment-info.json";

/// Fail with [`ScaffoldError::InsufficientBalance`] when `balance < required`.
pub fn check_balance(balance: u128, required: u128) -> Result<()> {
    if balance < required {
        return Err(ScaffoldError::InsufficientBalance { balance, required });
    }
    Ok(())
}

/// Block-explorer page for `address`, for networks that have one.
pub fn explorer_address_url(chain_id: u64, address: &str) -> Option<String> {
    match chain_id {
        SEPOLIA_CHAIN_ID => Some(format!("https://sepolia.etherscan.io/address/{address}")),
        MAINNET_CHAIN_ID => Some(format!("https://etherscan.io/address/{address}")),
        _ => None,
    }
}

/// What a successful deployment leaves behind on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    pub chain_id: u64,
    pub contract_address: String,
    pub deployer: String,
    pub deployment_tx: String,
    pub block_number: u64,
    /// Estimated cost in ether, formatted as a decimal string.
    pub deployment_cost: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

impl DeploymentRecord {
    /// Stamp the current time onto an otherwise complete record.
    pub fn now(
        network: &str,
        chain_id: u64,
        contract_address: String,
        deployer: String,
        deployment_tx: String,
        block_number: u64,
        deployment_cost: String,
    ) -> Self {
        Self {
            network: network.to_string(),
            chain_id,
            contract_address,
            deployer,
            deployment_tx,
            block_number,
            deployment_cost,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Write the record as pretty JSON, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| ScaffoldError::ArtifactParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScaffoldError::ArtifactNotFound {
                path: path.to_path_buf(),
                source: e,
            })?;
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::ArtifactParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
