//! Unified error types for the fhe-scaffold toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during fhe-scaffold operations.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    // --- Catalog ---

    /// The requested category key is not in the built-in catalog.
    #[error("unknown category: {key} (available: {available})")]
    ConfigNotFound { key: String, available: String },

    // --- Scaffolding ---

    /// The output directory already exists. Nothing was written.
    #[error("directory already exists: {0}")]
    TargetExists(PathBuf),

    /// A user-supplied name cannot be used as a contract identifier or directory.
    #[error("invalid name '{value}': {reason}")]
    InvalidName { value: String, reason: &'static str },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- Deployment ---

    /// The deployer account holds less than the minimum required to deploy.
    #[error("insufficient balance: {balance} wei (minimum required: {required} wei)")]
    InsufficientBalance { balance: u128, required: u128 },

    /// The compiled contract artifact could not be read.
    #[error("contract artifact not found at {path}")]
    ArtifactNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON file (artifact or deployment record) exists but is malformed.
    #[error("failed to parse {path}")]
    ArtifactParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The network name is not one of the configured networks.
    #[error("unknown network: {0} (supported: hardhat, localhost, sepolia, ethereum)")]
    UnknownNetwork(String),

    /// A required environment variable is unset or empty.
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, ScaffoldError>`.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
