//! Network and environment configuration for deployment.
//!
//! Networks come from a built-in table mirroring the Hardhat config the examples
//! ship with. RPC endpoints and credentials are read from the environment; missing
//! values fall back to empty strings so the remote call fails on its own rather
//! than here.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

pub const ENV_SEPOLIA_RPC_URL: &str = "SEPOLIA_RPC_URL";
pub const ENV_ETHEREUM_RPC_URL: &str = "ETHEREUM_RPC_URL";
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const ENV_ETHERSCAN_API_KEY: &str = "ETHERSCAN_API_KEY";

/// Chain id of the local Hardhat network.
pub const HARDHAT_CHAIN_ID: u64 = 31337;
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;
pub const MAINNET_CHAIN_ID: u64 = 1;

/// A deployable network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub rpc_url: String,
    pub chain_id: u64,
}

impl NetworkConfig {
    /// Resolve a network by name, reading RPC overrides through `env`.
    ///
    /// `env` is injected so tests do not depend on the process environment.
    pub fn resolve(name: &str, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let (rpc_url, chain_id) = match name {
            "hardhat" | "localhost" => ("http://127.0.0.1:8545".to_string(), HARDHAT_CHAIN_ID),
            "sepolia" => (
                env(ENV_SEPOLIA_RPC_URL)
                    .filter(|v| !v.is_empty())
                    .unwrap_or_else(|| "https://rpc.sepolia.dev".into()),
                SEPOLIA_CHAIN_ID,
            ),
            "ethereum" | "mainnet" => (
                env(ENV_ETHEREUM_RPC_URL).unwrap_or_default(),
                MAINNET_CHAIN_ID,
            ),
            other => return Err(ScaffoldError::UnknownNetwork(other.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            rpc_url,
            chain_id,
        })
    }

    /// Resolve against the process environment.
    pub fn from_env(name: &str) -> Result<Self> {
        Self::resolve(name, |key| std::env::var(key).ok())
    }
}

/// Credentials consumed by the deployment path.
#[derive(Clone, Default)]
pub struct DeployEnv {
    pub private_key: String,
    pub etherscan_api_key: String,
}

impl DeployEnv {
    pub fn from_env() -> Self {
        Self {
            private_key: std::env::var(ENV_PRIVATE_KEY).unwrap_or_default(),
            etherscan_api_key: std::env::var(ENV_ETHERSCAN_API_KEY).unwrap_or_default(),
        }
    }

    /// The deployer key, or [`ScaffoldError::MissingEnv`] if it is empty.
    pub fn require_private_key(&self) -> Result<&str> {
        if self.private_key.trim().is_empty() {
            return Err(ScaffoldError::MissingEnv(ENV_PRIVATE_KEY));
        }
        Ok(self.private_key.trim())
    }
}

impl std::fmt::Debug for DeployEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeployEnv")
            .field("private_key", &"<redacted>")
            .field("etherscan_api_key_set", &!self.etherscan_api_key.is_empty())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_local_networks() {
        let hardhat = NetworkConfig::resolve("hardhat", no_env).unwrap();
        assert_eq!(hardhat.chain_id, HARDHAT_CHAIN_ID);
        assert_eq!(hardhat.rpc_url, "http://127.0.0.1:8545");

        let localhost = NetworkConfig::resolve("localhost", no_env).unwrap();
        assert_eq!(localhost.rpc_url, hardhat.rpc_url);
    }

    #[test]
    fn test_sepolia_env_override() {
        let default = NetworkConfig::resolve("sepolia", no_env).unwrap();
        assert_eq!(default.rpc_url, "https://rpc.sepolia.dev");
        assert_eq!(default.chain_id, SEPOLIA_CHAIN_ID);

        let custom = NetworkConfig::resolve("sepolia", |key| {
            (key == ENV_SEPOLIA_RPC_URL).then(|| "https://example.invalid/rpc".to_string())
        })
        .unwrap();
        assert_eq!(custom.rpc_url, "https://example.invalid/rpc");
    }

    #[test]
    fn test_ethereum_without_env_has_empty_url() {
        let mainnet = NetworkConfig::resolve("ethereum", no_env).unwrap();
        assert!(mainnet.rpc_url.is_empty());
        assert_eq!(mainnet.chain_id, MAINNET_CHAIN_ID);
    }

    #[test]
    fn test_unknown_network() {
        assert!(matches!(
            NetworkConfig::resolve("polygon", no_env),
            Err(ScaffoldError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_private_key_required() {
        let env = DeployEnv::default();
        assert!(matches!(
            env.require_private_key(),
            Err(ScaffoldError::MissingEnv(ENV_PRIVATE_KEY))
        ));

        let env = DeployEnv {
            private_key: " 0xabc ".into(),
            ..Default::default()
        };
        assert_eq!(env.require_private_key().unwrap(), "0xabc");
        assert!(!format!("{env:?}").contains("abc"));
    }
}
