//! Handlebars-based template renderer for example scaffolding.
//!
//! Wraps the [`handlebars::Handlebars`] engine with **strict mode** enabled, so any
//! `{{variable}}` a template references must be present in the data context. HTML
//! escaping is switched off: the output is Solidity, TypeScript and Markdown, and
//! descriptions may legitimately contain quotes or `=`.
//!
//! Every `render_*` method is pure. The same input record always yields the same
//! bytes, and nothing here touches the filesystem.
//!
//! ```ignore
//! let renderer = TemplateRenderer::new();
//! let category = catalog::resolve("basic")?;
//! let source = renderer.render_contract(&category.examples[0])?;
//! ```

use handlebars::Handlebars;
use serde::Serialize;

use crate::catalog::{CategoryConfig, ExampleDefinition};
use crate::error::{Result, ScaffoldError};
use crate::project::{ExampleSpec, PackageManifest, SOLIDITY_VERSION};
use crate::templates::embedded;

/// Fallback RPC endpoint baked into generated Hardhat configs.
const SEPOLIA_DEFAULT_RPC: &str = "https://rpc.sepolia.dev";

#[derive(Serialize)]
struct ExampleContext<'a> {
    name: &'a str,
    title: &'a str,
    description: &'a str,
    contract_name: &'a str,
    concepts: &'a [&'a str],
    primary_concept: &'a str,
    difficulty_label: &'a str,
}

impl<'a> ExampleContext<'a> {
    fn new(example: &'a ExampleDefinition) -> Self {
        Self {
            name: example.name,
            title: example.title,
            description: example.description,
            contract_name: example.contract_name,
            concepts: example.concepts,
            primary_concept: example.concepts.first().copied().unwrap_or_default(),
            difficulty_label: example.difficulty.label(),
        }
    }
}

#[derive(Serialize)]
struct Step<'a> {
    number: usize,
    text: &'a str,
}

#[derive(Serialize)]
struct CategoryContext<'a> {
    name: &'a str,
    description: &'a str,
    difficulty_label: &'a str,
    steps: Vec<Step<'a>>,
    examples: Vec<ExampleContext<'a>>,
}

#[derive(Serialize)]
struct HardhatContext<'a> {
    solidity_version: &'a str,
    sepolia_rpc_url: &'a str,
}

/// Template renderer using Handlebars for generating example files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode enabled and escaping disabled.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(handlebars::no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| ScaffoldError::TemplateRender(e.to_string()))
    }

    /// Contract source for a catalog example.
    ///
    /// Only `contract_name`, `description`, `name` and `concepts` vary; title and
    /// difficulty do not affect the output.
    pub fn render_contract(&self, example: &ExampleDefinition) -> Result<String> {
        self.render(embedded::CATEGORY_CONTRACT, &ExampleContext::new(example))
    }

    /// Placeholder test suite for a catalog example.
    pub fn render_test(&self, example: &ExampleDefinition) -> Result<String> {
        self.render(embedded::CATEGORY_TEST, &ExampleContext::new(example))
    }

    /// Per-example README.
    pub fn render_example_readme(&self, example: &ExampleDefinition) -> Result<String> {
        self.render(embedded::CATEGORY_EXAMPLE_README, &ExampleContext::new(example))
    }

    /// Category README with the numbered learning path and one section per example.
    pub fn render_category_readme(&self, category: &CategoryConfig) -> Result<String> {
        let context = CategoryContext {
            name: category.name,
            description: category.description,
            difficulty_label: category.difficulty.label(),
            steps: category
                .learning_path
                .iter()
                .enumerate()
                .map(|(i, text)| Step { number: i + 1, text })
                .collect(),
            examples: category.examples.iter().map(ExampleContext::new).collect(),
        };
        self.render(embedded::CATEGORY_README, &context)
    }

    // --- Single-example mode ---

    pub fn render_standalone_contract(&self, spec: &ExampleSpec) -> Result<String> {
        self.render(embedded::EXAMPLE_CONTRACT, spec)
    }

    pub fn render_standalone_test(&self, spec: &ExampleSpec) -> Result<String> {
        self.render(embedded::EXAMPLE_TEST, spec)
    }

    pub fn render_standalone_readme(&self, spec: &ExampleSpec) -> Result<String> {
        self.render(embedded::EXAMPLE_README, spec)
    }

    pub fn render_deploy_script(&self, spec: &ExampleSpec) -> Result<String> {
        self.render(embedded::EXAMPLE_DEPLOY_SCRIPT, spec)
    }

    pub fn render_hardhat_config(&self) -> Result<String> {
        self.render(
            embedded::EXAMPLE_HARDHAT_CONFIG,
            &HardhatContext {
                solidity_version: SOLIDITY_VERSION,
                sepolia_rpc_url: SEPOLIA_DEFAULT_RPC,
            },
        )
    }

    /// `package.json` is structured data, so it goes through serde rather than a template.
    pub fn render_package_json(&self, spec: &ExampleSpec) -> Result<String> {
        let manifest = PackageManifest::for_example(spec);
        serde_json::to_string_pretty(&manifest).map_err(|e| ScaffoldError::Other(e.into()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
