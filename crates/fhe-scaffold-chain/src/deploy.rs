//! The deployment sequence.
//!
//! Connect, check funding, estimate, send, confirm, read back. Every step runs
//! once; the first RPC failure aborts the run. Read-back failures only warn,
//! because by then the contract is already on chain.

use alloy::dyn_abi::{DynSolValue, FunctionExt};
use alloy::json_abi::{Function, JsonAbi, StateMutability};
pub use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, Bytes, TxHash, U256};

use fhe_scaffold_core::artifacts::ContractArtifact;
use fhe_scaffold_core::config::NetworkConfig;
use fhe_scaffold_core::deployment::{check_balance, DeploymentRecord};

use crate::error::{ChainError, Result};
use crate::rpc::ChainRpc;

/// At most this many getters are called after deployment.
pub const MAX_READBACKS: usize = 5;

/// Blocks to wait on top of the deployment transaction.
pub const CONFIRMATIONS: u64 = 1;

/// Progress notifications emitted while deploying.
#[derive(Debug, Clone)]
pub enum DeployStage {
    Connected {
        chain_id: u64,
        deployer: Address,
        balance: U256,
        gas_price: u128,
    },
    Estimated {
        gas: u64,
        cost_wei: U256,
    },
    Submitted {
        tx_hash: TxHash,
    },
    Confirmed {
        address: Address,
        block_number: u64,
    },
    ReadBack(ReadBack),
}

/// Result of calling one zero-argument getter on the new contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadBack {
    pub function: String,
    /// Rendered return values, or the failure message.
    pub value: std::result::Result<String, String>,
}

#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub record: DeploymentRecord,
    pub gas_estimate: u64,
    pub readbacks: Vec<ReadBack>,
}

/// Deploys compiled artifacts through a [`ChainRpc`].
pub struct Deployer<'a, R: ChainRpc + ?Sized> {
    rpc: &'a R,
    min_balance: u128,
}

impl<'a, R: ChainRpc + ?Sized> Deployer<'a, R> {
    pub fn new(rpc: &'a R, min_balance: u128) -> Self {
        Self { rpc, min_balance }
    }

    pub async fn deploy(
        &self,
        network: &NetworkConfig,
        artifact: &ContractArtifact,
        mut on_stage: impl FnMut(&DeployStage),
    ) -> Result<DeployOutcome> {
        let code = decode_bytecode(artifact)?;

        let chain_id = self.rpc.chain_id().await?;
        let deployer = self.rpc.deployer();
        let balance = self.rpc.balance().await?;
        let gas_price = self.rpc.gas_price().await?;
        on_stage(&DeployStage::Connected {
            chain_id,
            deployer,
            balance,
            gas_price,
        });

        check_balance(u128::try_from(balance).unwrap_or(u128::MAX), self.min_balance)?;

        let gas = self.rpc.estimate_deploy_gas(&code).await?;
        let cost_wei = U256::from(gas) * U256::from(gas_price);
        tracing::info!(gas, cost = %format_ether(cost_wei), "estimated deployment cost");
        on_stage(&DeployStage::Estimated { gas, cost_wei });

        let tx_hash = self.rpc.send_deploy(code).await?;
        on_stage(&DeployStage::Submitted { tx_hash });

        let receipt = self.rpc.confirm(tx_hash, CONFIRMATIONS).await?;
        on_stage(&DeployStage::Confirmed {
            address: receipt.contract_address,
            block_number: receipt.block_number,
        });

        let mut readbacks = Vec::new();
        for function in readable_functions(&artifact.abi) {
            let readback = self.read_back(receipt.contract_address, &function).await;
            if let Err(e) = &readback.value {
                tracing::warn!("could not read {}: {e}", readback.function);
            }
            on_stage(&DeployStage::ReadBack(readback.clone()));
            readbacks.push(readback);
        }

        let record = DeploymentRecord::now(
            &network.name,
            chain_id,
            receipt.contract_address.to_string(),
            deployer.to_string(),
            tx_hash.to_string(),
            receipt.block_number,
            format_ether(cost_wei),
        );

        Ok(DeployOutcome {
            record,
            gas_estimate: gas,
            readbacks,
        })
    }

    async fn read_back(&self, to: Address, function: &Function) -> ReadBack {
        let data = Bytes::from(function.selector().to_vec());
        let value = match self.rpc.call(to, data).await {
            Ok(output) => function
                .abi_decode_output(&output)
                .map(|values| format_values(&values))
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        ReadBack {
            function: function.name.clone(),
            value,
        }
    }
}

/// Creation bytecode from an artifact, rejecting empty or non-hex input.
pub fn decode_bytecode(artifact: &ContractArtifact) -> Result<Bytes> {
    if !artifact.is_deployable() {
        return Err(ChainError::Bytecode {
            contract: artifact.contract_name.clone(),
            reason: "bytecode is empty (abstract contract or interface?)".into(),
        });
    }
    let raw = artifact.bytecode.trim();
    let raw = raw.strip_prefix("0x").unwrap_or(raw);
    hex::decode(raw)
        .map(Bytes::from)
        .map_err(|e| ChainError::Bytecode {
            contract: artifact.contract_name.clone(),
            reason: e.to_string(),
        })
}

/// Zero-argument `view`/`pure` functions, sorted by name, capped at [`MAX_READBACKS`].
///
/// An ABI that does not parse yields nothing.
pub fn readable_functions(abi: &serde_json::Value) -> Vec<Function> {
    let abi: JsonAbi = match serde_json::from_value(abi.clone()) {
        Ok(abi) => abi,
        Err(e) => {
            tracing::warn!("skipping read-back, ABI did not parse: {e}");
            return Vec::new();
        }
    };

    let mut functions: Vec<Function> = abi
        .functions()
        .filter(|f| {
            f.inputs.is_empty()
                && matches!(f.state_mutability, StateMutability::View | StateMutability::Pure)
        })
        .cloned()
        .collect();
    functions.truncate(MAX_READBACKS);
    functions
}

fn format_values(values: &[DynSolValue]) -> String {
    values.iter().map(format_value).collect::<Vec<_>>().join(", ")
}

fn format_value(value: &DynSolValue) -> String {
    match value {
        DynSolValue::Bool(b) => b.to_string(),
        DynSolValue::Int(i, _) => i.to_string(),
        DynSolValue::Uint(u, _) => u.to_string(),
        DynSolValue::Address(a) => a.to_string(),
        DynSolValue::FixedBytes(word, size) => format!("0x{}", hex::encode(&word[..*size])),
        DynSolValue::Bytes(b) => format!("0x{}", hex::encode(b)),
        DynSolValue::String(s) => s.clone(),
        DynSolValue::Array(items) | DynSolValue::FixedArray(items) => {
            format!("[{}]", format_values(items))
        }
        DynSolValue::Tuple(items) => format!("({})", format_values(items)),
        other => format!("{other:?}"),
    }
}
