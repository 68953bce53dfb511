use std::path::Path;

use anyhow::Result;

use fhe_scaffold_core::project::ExampleSpec;
use fhe_scaffold_core::scaffold;
use fhe_scaffold_core::templates::renderer::TemplateRenderer;

use crate::output;
use crate::CategoryChoice;

/// Generate a standalone Hardhat project in `<output_dir>/<slug>`.
pub fn run(
    name: &str,
    category: &CategoryChoice,
    description: &str,
    contract_name: Option<String>,
    features: Vec<String>,
    output_dir: &Path,
) -> Result<()> {
    output::print_header(&format!("fhe-scaffold example: {name}"));

    let mut spec = ExampleSpec::new(name, category.key(), description)?.with_features(features);
    if let Some(contract_name) = contract_name {
        spec = spec.with_contract_name(contract_name)?;
    }

    let root = output_dir.join(spec.slug());
    output::print_key_value("Category", spec.category.as_str());
    output::print_key_value("Contract", &spec.contract_name);
    output::print_key_value("Output", &root.display().to_string());

    output::print_step(1, 1, "Writing project files");
    let report = scaffold::materialize_example(&root, &spec, &TemplateRenderer::new())?;

    for file in &report.files {
        tracing::info!("created {}", file.display());
    }

    output::print_success(&format!(
        "Example '{name}' created ({} files)",
        report.files.len()
    ));
    println!();
    println!("  Next steps:");
    output::print_command(&format!("cd {}", root.display()));
    output::print_command("npm install");
    output::print_command("npx hardhat compile");
    output::print_command("npx hardhat test");
    println!();

    Ok(())
}
