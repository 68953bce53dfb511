//! CLI command implementations for fhe-scaffold.
//!
//! Each module corresponds to a subcommand (`fhe-scaffold <command>`).

pub mod category;
pub mod deploy;
pub mod docs;
pub mod example;
pub mod list;
