//! Core library for the fhe-scaffold toolkit.
//!
//! Provides the built-in example [`catalog`], Handlebars [`templates`], the
//! filesystem [`scaffold`] materializer, the Solidity [`docs`] scraper, and the
//! chain-independent halves of deployment: network [`config`], compiler
//! [`artifacts`] and the persisted [`deployment`] record.
//!
//! Talking to a node lives in
//! [`fhe_scaffold_chain`](https://docs.rs/fhe-scaffold-chain), so this crate stays
//! free of the EVM stack.

pub mod artifacts;
pub mod catalog;
pub mod config;
pub mod deployment;
pub mod docs;
pub mod error;
pub mod naming;
pub mod project;
pub mod scaffold;
pub mod templates;
