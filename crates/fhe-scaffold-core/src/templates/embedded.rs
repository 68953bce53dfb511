//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/fhe-scaffold-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.

// -------------------------------------------------------
// Category mode (one tree per catalog example)
// -------------------------------------------------------

pub const CATEGORY_CONTRACT: &str = include_str!("../../../../templates/category/contract.sol.hbs");
pub const CATEGORY_TEST: &str = include_str!("../../../../templates/category/test.ts.hbs");
pub const CATEGORY_EXAMPLE_README: &str =
    include_str!("../../../../templates/category/example_readme.md.hbs");
pub const CATEGORY_README: &str = include_str!("../../../../templates/category/category_readme.md.hbs");

// -------------------------------------------------------
// Single-example mode (standalone project)
// -------------------------------------------------------

pub const EXAMPLE_CONTRACT: &str = include_str!("../../../../templates/example/contract.sol.hbs");
pub const EXAMPLE_TEST: &str = include_str!("../../../../templates/example/test.ts.hbs");
pub const EXAMPLE_README: &str = include_str!("../../../../templates/example/readme.md.hbs");
pub const EXAMPLE_HARDHAT_CONFIG: &str =
    include_str!("../../../../templates/example/hardhat.config.ts.hbs");
pub const EXAMPLE_DEPLOY_SCRIPT: &str = include_str!("../../../../templates/example/deploy.ts.hbs");
