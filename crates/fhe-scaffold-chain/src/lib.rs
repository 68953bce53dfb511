//! # fhe-scaffold-chain
//!
//! Deploys compiled example contracts to an EVM network over JSON-RPC.
//!
//! [`rpc::AlloyRpc`] connects to a node with a local signer; [`deploy::Deployer`]
//! drives the funding check, gas estimate, creation transaction, confirmation and
//! getter read-back against any [`rpc::ChainRpc`].

pub mod deploy;
pub mod error;
pub mod rpc;
