//! Loading compiled contract artifacts.
//!
//! Deployment does not compile anything itself; it reads the JSON artifact the
//! Solidity toolchain leaves at `artifacts/contracts/<Name>.sol/<Name>.json`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ScaffoldError};

/// The fields of a compiler artifact that deployment needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    /// ABI as raw JSON; decoded by the chain crate.
    #[serde(default)]
    pub abi: serde_json::Value,
    /// Creation bytecode, `0x`-prefixed hex.
    pub bytecode: String,
}

impl ContractArtifact {
    /// Whether the artifact carries creation code (abstract contracts and
    /// interfaces compile to `0x`).
    pub fn is_deployable(&self) -> bool {
        let code = self.bytecode.trim_start_matches("0x");
        !code.is_empty()
    }
}

/// Conventional artifact path for `contract_name` under `artifacts_dir`.
pub fn path_for(artifacts_dir: &Path, contract_name: &str) -> PathBuf {
    artifacts_dir
        .join("contracts")
        .join(format!("{contract_name}.sol"))
        .join(format!("{contract_name}.json"))
}

/// Load an artifact from `path`.
pub fn load(path: &Path) -> Result<ContractArtifact> {
    let contents = std::fs::read_to_string(path).map_err(|e| ScaffoldError::ArtifactNotFound {
        path: path.to_path_buf(),
        source: e,
    })?;
    let artifact: ContractArtifact =
        serde_json::from_str(&contents).map_err(|e| ScaffoldError::ArtifactParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for() {
        assert_eq!(
            path_for(Path::new("artifacts"), "EncryptedCounter"),
            PathBuf::from("artifacts/contracts/EncryptedCounter.sol/EncryptedCounter.json")
        );
    }

    #[test]
    fn test_load_hardhat_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = path_for(dir.path(), "Counter");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{
                "_format": "hh-sol-artifact-1",
                "contractName": "Counter",
                "sourceName": "contracts/Counter.sol",
                "abi": [{"type": "function", "name": "count", "inputs": [], "outputs": [{"name": "", "type": "uint256"}], "stateMutability": "view"}],
                "bytecode": "0x6080",
                "deployedBytecode": "0x6080"
            }"#,
        )
        .unwrap();

        let artifact = load(&path).unwrap();
        assert_eq!(artifact.contract_name, "Counter");
        assert!(artifact.is_deployable());
        assert!(artifact.abi.is_array());
    }

    #[test]
    fn test_interface_is_not_deployable() {
        let artifact = ContractArtifact {
            contract_name: "ICounter".into(),
            abi: serde_json::Value::Null,
            bytecode: "0x".into(),
        };
        assert!(!artifact.is_deployable());
    }

    #[test]
    fn test_load_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ScaffoldError::ArtifactNotFound { .. }));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            load(&bad).unwrap_err(),
            ScaffoldError::ArtifactParse { .. }
        ));
    }
}
