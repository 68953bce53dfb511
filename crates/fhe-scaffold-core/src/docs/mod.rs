//! API documentation generated from Solidity sources.
//!
//! [`scrape`] recovers an approximate structure from each `.sol` file and
//! [`markdown`] renders it. [`generate`] drives both over a directory.

pub mod markdown;
pub mod scrape;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use markdown::{render_index, render_markdown};
pub use scrape::{scrape, ContractDoc};

/// Name of the index page written next to the per-contract pages.
pub const INDEX_FILE: &str = "INDEX.md";

/// Outcome of a [`generate`] run.
#[derive(Debug, Clone, Default)]
pub struct DocsReport {
    /// Pages written, one per processed source file, in processing order.
    pub pages: Vec<PathBuf>,
    /// Source files that could not be read.
    pub skipped: Vec<PathBuf>,
    pub index: Option<PathBuf>,
}

/// Render one page per `.sol` file in `contracts_dir` into `docs_dir`, plus an index.
///
/// Files are processed in name order. A file that cannot be read is logged and
/// skipped. When the directory holds no `.sol` files nothing is written.
pub fn generate(contracts_dir: &Path, docs_dir: &Path) -> Result<DocsReport> {
    let mut sources: Vec<PathBuf> = std::fs::read_dir(contracts_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "sol"))
        .collect();
    sources.sort();

    let mut report = DocsReport::default();
    if sources.is_empty() {
        return Ok(report);
    }

    std::fs::create_dir_all(docs_dir)?;

    let mut names = Vec::new();
    for source_path in &sources {
        let Some(stem) = source_path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };

        let source = match std::fs::read_to_string(source_path) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("skipping {}: {e}", source_path.display());
                report.skipped.push(source_path.clone());
                continue;
            }
        };

        let page = docs_dir.join(format!("{stem}.md"));
        std::fs::write(&page, render_markdown(&scrape(&source)))?;
        tracing::debug!("wrote {}", page.display());

        report.pages.push(page);
        names.push(stem);
    }

    let index = docs_dir.join(INDEX_FILE);
    std::fs::write(&index, render_index(&names))?;
    report.index = Some(index);

    Ok(report)
}
