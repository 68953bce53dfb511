use std::path::Path;

use anyhow::Result;

use fhe_scaffold_core::catalog;
use fhe_scaffold_core::scaffold;
use fhe_scaffold_core::templates::renderer::TemplateRenderer;

use crate::commands::list;
use crate::output;

/// Generate all examples of one catalog category.
///
/// Without a key this only prints the catalog. An unknown key or an existing
/// output directory fails before anything is written.
pub fn run(category: Option<&str>, output_dir: &Path) -> Result<()> {
    let Some(key) = category else {
        list::print_available();
        println!();
        println!("Usage: fhe-scaffold category --category <key> [--output-dir <dir>]");
        return Ok(());
    };

    let config = catalog::resolve(key)?;

    output::print_header(&format!("fhe-scaffold category: {}", config.name));

    let root = scaffold::category_output_dir(output_dir, key);
    output::print_key_value("Output", &root.display().to_string());
    output::print_key_value("Examples", &config.examples.len().to_string());

    scaffold::preflight(&root)?;

    output::print_step(1, 2, "Generating examples");
    let renderer = TemplateRenderer::new();
    let report = scaffold::materialize_category(&root, config, &renderer, |name| {
        output::print_success(&format!("Created {name}"));
    })?;

    output::print_step(2, 2, "Wrote category README");

    output::print_success(&format!(
        "Generated {} examples ({} files) in {}",
        config.examples.len(),
        report.files.len(),
        root.display()
    ));
    println!();
    println!("  Next steps:");
    output::print_command(&format!("cd {}", root.display()));
    output::print_command("cat README.md");
    println!();

    Ok(())
}
