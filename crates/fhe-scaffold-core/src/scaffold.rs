//! Filesystem materializer for generated examples.
//!
//! ## Category layout
//!
//! ```text
//! fhevm-<category>-examples/
//! ├── README.md                      # learning path + example index
//! └── <example>/
//!     ├── README.md
//!     ├── contracts/<Contract>.sol
//!     ├── test/<Contract>.test.ts
//!     └── scripts/
//! ```
//!
//! ## Single-example layout
//!
//! ```text
//! <slug>/
//! ├── README.md
//! ├── hardhat.config.ts
//! ├── package.json
//! ├── contracts/<Contract>.sol
//! ├── test/<Contract>.test.ts
//! ├── scripts/deploy.ts
//! ├── frontend/
//! └── docs/
//! ```
//!
//! Both modes refuse to run when the target root already exists, before writing
//! anything. After that check the run is not transactional: an I/O failure midway
//! leaves whatever was already written in place.

use std::path::{Path, PathBuf};

use crate::catalog::CategoryConfig;
use crate::error::{Result, ScaffoldError};
use crate::naming::validate_identifier;
use crate::project::ExampleSpec;
use crate::templates::renderer::TemplateRenderer;

/// Files written by a scaffolding run, relative to `root`, in write order.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}

impl ScaffoldReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            files: Vec::new(),
        }
    }

    fn write(&mut self, relative: impl AsRef<Path>, contents: &str) -> Result<()> {
        let relative = relative.as_ref();
        std::fs::write(self.root.join(relative), contents)?;
        tracing::debug!("wrote {}", relative.display());
        self.files.push(relative.to_path_buf());
        Ok(())
    }
}

/// Output directory for a category run: `<base>/fhevm-<key>-examples`.
pub fn category_output_dir(base: &Path, key: &str) -> PathBuf {
    base.join(format!("fhevm-{key}-examples"))
}

/// Fail with [`ScaffoldError::TargetExists`] if `root` is already present.
pub fn preflight(root: &Path) -> Result<()> {
    if root.exists() {
        return Err(ScaffoldError::TargetExists(root.to_path_buf()));
    }
    Ok(())
}

/// Generate one subdirectory per example plus the category README.
///
/// `on_example` is called with each example slug after its files are written,
/// so the caller can report progress.
pub fn materialize_category(
    root: &Path,
    category: &CategoryConfig,
    renderer: &TemplateRenderer,
    mut on_example: impl FnMut(&str),
) -> Result<ScaffoldReport> {
    preflight(root)?;
    std::fs::create_dir_all(root)?;

    let mut report = ScaffoldReport::new(root);

    for example in category.examples {
        let dir = Path::new(example.name);
        for sub in ["contracts", "test", "scripts"] {
            std::fs::create_dir_all(root.join(dir).join(sub))?;
        }

        let contract = renderer.render_contract(example)?;
        let test = renderer.render_test(example)?;
        let readme = renderer.render_example_readme(example)?;

        report.write(
            dir.join("contracts").join(format!("{}.sol", example.contract_name)),
            &contract,
        )?;
        report.write(
            dir.join("test").join(format!("{}.test.ts", example.contract_name)),
            &test,
        )?;
        report.write(dir.join("README.md"), &readme)?;

        on_example(example.name);
    }

    let readme = renderer.render_category_readme(category)?;
    report.write("README.md", &readme)?;

    Ok(report)
}

/// Generate a standalone Hardhat project for one example.
///
/// The contract name becomes a file name, so it is checked again here in case
/// the field was set directly.
pub fn materialize_example(
    root: &Path,
    spec: &ExampleSpec,
    renderer: &TemplateRenderer,
) -> Result<ScaffoldReport> {
    validate_identifier(&spec.contract_name)?;
    preflight(root)?;

    for sub in ["contracts", "test", "scripts", "frontend", "docs"] {
        std::fs::create_dir_all(root.join(sub))?;
    }

    let mut report = ScaffoldReport::new(root);

    report.write(
        Path::new("contracts").join(format!("{}.sol", spec.contract_name)),
        &renderer.render_standalone_contract(spec)?,
    )?;
    report.write(
        Path::new("test").join(format!("{}.test.ts", spec.contract_name)),
        &renderer.render_standalone_test(spec)?,
    )?;
    report.write("README.md", &renderer.render_standalone_readme(spec)?)?;
    report.write("hardhat.config.ts", &renderer.render_hardhat_config()?)?;
    report.write("package.json", &renderer.render_package_json(spec)?)?;
    report.write(
        Path::new("scripts").join("deploy.ts"),
        &renderer.render_deploy_script(spec)?,
    )?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, CategoryKey};
    use crate::project::DEFAULT_DESCRIPTION;

    /// Recursive listing of every path under `dir`, sorted.
    fn snapshot(dir: &Path) -> Vec<PathBuf> {
        let mut out = Vec::new();
        let mut stack = vec![dir.to_path_buf()];
        while let Some(current) = stack.pop() {
            for entry in std::fs::read_dir(&current).unwrap() {
                let path = entry.unwrap().path();
                if path.is_dir() {
                    stack.push(path.clone());
                }
                out.push(path);
            }
        }
        out.sort();
        out
    }

    fn files_with_suffix(dir: &Path, suffix: &str) -> usize {
        snapshot(dir)
            .iter()
            .filter(|p| p.is_file() && p.to_string_lossy().ends_with(suffix))
            .count()
    }

    #[test]
    fn test_category_output_dir() {
        assert_eq!(
            category_output_dir(Path::new("/tmp/out"), "basic"),
            PathBuf::from("/tmp/out/fhevm-basic-examples")
        );
    }

    #[test]
    fn test_materialize_basic_category() {
        let tmp = tempfile::tempdir().unwrap();
        let root = category_output_dir(tmp.path(), "basic");
        let basic = catalog::resolve("basic").unwrap();

        let mut seen = Vec::new();
        let report =
            materialize_category(&root, basic, &TemplateRenderer::new(), |name| {
                seen.push(name.to_string())
            })
            .unwrap();

        assert_eq!(seen, ["counter", "arithmetic", "equality"]);
        assert_eq!(report.files.len(), 3 * 3 + 1);
        assert_eq!(report.files.last().unwrap(), Path::new("README.md"));

        let mut subdirs: Vec<String> = std::fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        subdirs.sort();
        assert_eq!(subdirs, ["arithmetic", "counter", "equality"]);

        for example in basic.examples {
            let dir = root.join(example.name);
            assert_eq!(files_with_suffix(&dir, ".sol"), 1);
            assert_eq!(files_with_suffix(&dir, ".test.ts"), 1);
            assert_eq!(files_with_suffix(&dir, "README.md"), 1);
            assert!(dir.join("scripts").is_dir());
            assert!(dir
                .join("contracts")
                .join(format!("{}.sol", example.contract_name))
                .is_file());
        }

        let readme = std::fs::read_to_string(root.join("README.md")).unwrap();
        assert!(readme.contains("# Basic FHE Operations"));
    }

    #[test]
    fn test_materialize_refuses_existing_root_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("fhevm-basic-examples");
        std::fs::create_dir_all(root.join("keep")).unwrap();
        std::fs::write(root.join("keep/note.txt"), "untouched").unwrap();

        let before = snapshot(tmp.path());
        let basic = catalog::resolve("basic").unwrap();
        let err = materialize_category(&root, basic, &TemplateRenderer::new(), |_| {})
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::TargetExists(ref p) if p == &root));
        assert_eq!(snapshot(tmp.path()), before);
        assert_eq!(
            std::fs::read_to_string(root.join("keep/note.txt")).unwrap(),
            "untouched"
        );
    }

    #[test]
    fn test_materialize_example_project() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = ExampleSpec::new("MyExample", CategoryKey::Basic, DEFAULT_DESCRIPTION).unwrap();
        let root = tmp.path().join(spec.slug());

        let report = materialize_example(&root, &spec, &TemplateRenderer::new()).unwrap();
        assert_eq!(report.files.len(), 6);

        let contract = std::fs::read_to_string(root.join("contracts/MyExample.sol")).unwrap();
        assert!(contract.contains("contract MyExample is SepoliaConfig"));
        assert!(root.join("test/MyExample.test.ts").is_file());
        assert!(root.join("scripts/deploy.ts").is_file());
        assert!(root.join("hardhat.config.ts").is_file());
        assert!(root.join("package.json").is_file());
        assert!(root.join("frontend").is_dir());
        assert!(root.join("docs").is_dir());
    }

    #[test]
    fn test_materialize_example_rejects_path_like_contract_name() {
        let tmp = tempfile::tempdir().unwrap();
        let mut spec = ExampleSpec::new("demo", CategoryKey::Basic, DEFAULT_DESCRIPTION).unwrap();
        spec.contract_name = "../../escaped".into();
        let root = tmp.path().join("a").join(spec.slug());

        let err = materialize_example(&root, &spec, &TemplateRenderer::new()).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
        assert!(snapshot(tmp.path()).is_empty());
    }

    #[test]
    fn test_materialize_example_refuses_existing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = ExampleSpec::new("MyExample", CategoryKey::Basic, DEFAULT_DESCRIPTION).unwrap();
        let root = tmp.path().join(spec.slug());
        std::fs::create_dir_all(&root).unwrap();

        let err = materialize_example(&root, &spec, &TemplateRenderer::new()).unwrap_err();
        assert!(matches!(err, ScaffoldError::TargetExists(_)));
        assert!(snapshot(&root).is_empty());
    }
}
