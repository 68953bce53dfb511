//! The RPC seam used by the deployer.
//!
//! [`ChainRpc`] is the small slice of JSON-RPC the deployment sequence needs.
//! [`AlloyRpc`] implements it against a live node through an alloy provider with
//! a local signer; tests substitute an in-memory implementation.

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionConfig, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;

use crate::error::{rpc, ChainError, Result};

/// What a mined deployment transaction produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployReceipt {
    pub contract_address: Address,
    pub block_number: u64,
}

#[async_trait]
pub trait ChainRpc: Send + Sync {
    /// Address of the signing account.
    fn deployer(&self) -> Address;

    async fn chain_id(&self) -> Result<u64>;

    /// Balance of the deployer, in wei.
    async fn balance(&self) -> Result<U256>;

    /// Current gas price, in wei.
    async fn gas_price(&self) -> Result<u128>;

    async fn estimate_deploy_gas(&self, code: &Bytes) -> Result<u64>;

    /// Sign and broadcast a contract-creation transaction.
    async fn send_deploy(&self, code: Bytes) -> Result<TxHash>;

    /// Wait for `confirmations` blocks on top of `tx`, then fetch its receipt.
    async fn confirm(&self, tx: TxHash, confirmations: u64) -> Result<DeployReceipt>;

    /// `eth_call` against `to` with raw calldata.
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;
}

/// [`ChainRpc`] over HTTP with a local private-key signer.
pub struct AlloyRpc {
    provider: DynProvider,
    deployer: Address,
}

impl AlloyRpc {
    pub fn connect(rpc_url: &str, private_key: &str) -> Result<Self> {
        let url = Url::parse(rpc_url).map_err(|e| ChainError::InvalidRpcUrl {
            url: rpc_url.to_string(),
            reason: e.to_string(),
        })?;

        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|e| ChainError::Signer(format!("{e}")))?;
        let deployer = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(url)
            .erased();

        tracing::debug!("connected to {rpc_url} as {deployer}");
        Ok(Self { provider, deployer })
    }
}

#[async_trait]
impl ChainRpc for AlloyRpc {
    fn deployer(&self) -> Address {
        self.deployer
    }

    async fn chain_id(&self) -> Result<u64> {
        self.provider.get_chain_id().await.map_err(rpc)
    }

    async fn balance(&self) -> Result<U256> {
        self.provider.get_balance(self.deployer).await.map_err(rpc)
    }

    async fn gas_price(&self) -> Result<u128> {
        self.provider.get_gas_price().await.map_err(rpc)
    }

    async fn estimate_deploy_gas(&self, code: &Bytes) -> Result<u64> {
        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(code.clone());
        self.provider.estimate_gas(tx).await.map_err(rpc)
    }

    async fn send_deploy(&self, code: Bytes) -> Result<TxHash> {
        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(code);
        let pending = self.provider.send_transaction(tx).await.map_err(rpc)?;
        Ok(*pending.tx_hash())
    }

    async fn confirm(&self, tx: TxHash, confirmations: u64) -> Result<DeployReceipt> {
        let config = PendingTransactionConfig::new(tx).with_required_confirmations(confirmations);
        self.provider
            .watch_pending_transaction(config)
            .await
            .map_err(rpc)?
            .await
            .map_err(rpc)?;

        let receipt = self
            .provider
            .get_transaction_receipt(tx)
            .await
            .map_err(rpc)?
            .ok_or_else(|| ChainError::Rpc(format!("no receipt for {tx}")))?;

        let contract_address = receipt
            .contract_address
            .ok_or_else(|| ChainError::NoContractAddress(tx.to_string()))?;

        Ok(DeployReceipt {
            contract_address,
            block_number: receipt.block_number.unwrap_or_default(),
        })
    }

    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let tx = TransactionRequest::default().with_to(to).with_input(data);
        self.provider.call(tx).await.map_err(rpc)
    }
}
