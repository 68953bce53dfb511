//! Template system for example scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Each template is rendered from a small context struct built in [`renderer`], so
//! derived values live in Rust rather than in template helpers:
//! - `{{contract_name}}`: Solidity contract identifier
//! - `{{concepts}}` / `{{features}}`: lists iterated with `{{#each}}`
//! - `{{primary_concept}}`: first concept, or empty
//! - `{{difficulty_label}}`: upper-case difficulty
//! - `{{steps}}`: learning path entries with 1-based `number` and `text`
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`] must stay in sync.
//! The `include_str!` paths are relative to this file and checked at compile-time.

pub mod embedded;
pub mod renderer;
