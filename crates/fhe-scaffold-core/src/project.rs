//! Standalone example project definition.
//!
//! Single-example mode scaffolds one self-contained Hardhat project rather than a
//! whole catalog category. The definition comes from the command line, so unlike
//! [`crate::catalog::ExampleDefinition`] it owns its strings.

use serde::Serialize;

use crate::catalog::CategoryKey;
use crate::error::Result;
use crate::naming::{to_pascal_case, to_slug, validate_identifier, validate_slug};

/// Default example name when none is given.
pub const DEFAULT_NAME: &str = "MyExample";

/// Default description when none is given.
pub const DEFAULT_DESCRIPTION: &str = "Example FHE contract demonstrating FHE operations";

/// Solidity compiler version pinned in generated Hardhat configs.
pub const SOLIDITY_VERSION: &str = "0.8.24";

/// A standalone example project.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleSpec {
    /// Name as given by the user; also the README title.
    pub name: String,
    /// Catalog category the example belongs to.
    pub category: CategoryKey,
    pub description: String,
    /// Solidity contract identifier (defaults to the PascalCase name).
    pub contract_name: String,
    /// Feature bullets listed in the README.
    pub features: Vec<String>,
}

impl ExampleSpec {
    /// Build an example definition.
    ///
    /// Fails with [`ScaffoldError::InvalidName`](crate::error::ScaffoldError::InvalidName)
    /// unless the name yields a single-component directory slug and a Solidity
    /// identifier.
    pub fn new(name: &str, category: CategoryKey, description: &str) -> Result<Self> {
        validate_slug(&to_slug(name))?;
        let contract_name = to_pascal_case(name);
        validate_identifier(&contract_name)?;
        Ok(Self {
            name: name.to_string(),
            category,
            description: description.to_string(),
            contract_name,
            features: Vec::new(),
        })
    }

    /// Override the derived contract name. It must be a Solidity identifier.
    pub fn with_contract_name(mut self, contract_name: impl Into<String>) -> Result<Self> {
        let contract_name = contract_name.into();
        validate_identifier(&contract_name)?;
        self.contract_name = contract_name;
        Ok(self)
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    /// Output directory name (lower-cased example name).
    pub fn slug(&self) -> String {
        to_slug(&self.name)
    }
}

/// `package.json` written into standalone example projects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: &'static str,
    pub description: String,
    pub scripts: Scripts,
    pub dependencies: Dependencies,
    pub dev_dependencies: DevDependencies,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scripts {
    pub compile: &'static str,
    pub test: &'static str,
    pub coverage: &'static str,
    pub deploy: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dependencies {
    #[serde(rename = "@fhevm/solidity")]
    pub fhevm_solidity: &'static str,
    pub ethers: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DevDependencies {
    #[serde(rename = "@nomicfoundation/hardhat-toolbox")]
    pub hardhat_toolbox: &'static str,
    pub hardhat: &'static str,
    pub typescript: &'static str,
    #[serde(rename = "@types/node")]
    pub types_node: &'static str,
}

impl PackageManifest {
    pub fn for_example(spec: &ExampleSpec) -> Self {
        Self {
            name: format!("fhevm-example-{}", spec.slug()),
            version: "1.0.0",
            description: spec.description.clone(),
            scripts: Scripts {
                compile: "hardhat compile",
                test: "hardhat test",
                coverage: "hardhat coverage",
                deploy: "hardhat run scripts/deploy.ts --network sepolia",
            },
            dependencies: Dependencies {
                fhevm_solidity: "^0.3.0",
                ethers: "^5.7.2",
            },
            dev_dependencies: DevDependencies {
                hardhat_toolbox: "^4.0.0",
                hardhat: "^2.17.0",
                typescript: "^5.0.0",
                types_node: "^20.0.0",
            },
        }
    }
}
