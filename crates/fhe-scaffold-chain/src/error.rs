//! Errors raised while talking to a chain.

use fhe_scaffold_core::error::ScaffoldError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    /// A chain-independent failure (missing artifact, insufficient balance, ...).
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// The RPC endpoint URL could not be parsed.
    #[error("invalid RPC url '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    /// The deployer private key could not be parsed.
    #[error("invalid private key: {0}")]
    Signer(String),

    /// The artifact bytecode is not valid hex, or is empty.
    #[error("invalid bytecode for {contract}: {reason}")]
    Bytecode { contract: String, reason: String },

    /// Any JSON-RPC or transport failure. Not retried.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// The transaction was mined but the receipt names no created contract.
    #[error("transaction {0} did not create a contract")]
    NoContractAddress(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;

/// Map any displayable transport error into [`ChainError::Rpc`].
pub(crate) fn rpc<E: std::fmt::Display>(e: E) -> ChainError {
    ChainError::Rpc(e.to_string())
}
