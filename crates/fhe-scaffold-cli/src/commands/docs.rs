use std::path::Path;

use anyhow::{Context, Result};

use fhe_scaffold_core::docs;

use crate::output;

/// Render Markdown API pages for every `.sol` file in `contracts_dir`.
pub fn run(contracts_dir: &Path, out_dir: &Path) -> Result<()> {
    output::print_header("fhe-scaffold docs");
    output::print_key_value("Sources", &contracts_dir.display().to_string());
    output::print_key_value("Output", &out_dir.display().to_string());

    let report = docs::generate(contracts_dir, out_dir)
        .with_context(|| format!("failed to read {}", contracts_dir.display()))?;

    for skipped in &report.skipped {
        output::print_warning(&format!("Skipped unreadable {}", skipped.display()));
    }

    if report.pages.is_empty() {
        output::print_warning("No .sol files found, nothing generated");
        return Ok(());
    }

    for page in &report.pages {
        output::print_success(&format!("Wrote {}", page.display()));
    }
    if let Some(index) = &report.index {
        output::print_key_value("Index", &index.display().to_string());
    }

    Ok(())
}
