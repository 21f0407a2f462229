//! Template installer — copies versioned template sources into their
//! per-assistant destinations inside a target project.

use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::registry::{Registry, Selector};

/// Counts from one install pass.
#[derive(Debug, Default)]
pub struct InstallReport {
    pub copied: usize,
    pub skipped: usize,
}

/// Install templates for the selected assistant(s) into `project_dir`.
///
/// A template source missing from the version directory is warned about and
/// skipped; the rest of the pass continues. Any other filesystem error aborts
/// the remaining work — there is no rollback, pairs already copied stay in
/// place.
pub fn install(
    registry: &Registry,
    templates_root: &Path,
    project_dir: &Path,
    selector: Selector,
    version: Option<&str>,
) -> Result<InstallReport> {
    let mut report = InstallReport::default();

    for assistant in selector.resolve() {
        let spec = registry.spec(assistant)?;
        let sources = registry.source_paths(assistant, templates_root, version)?;

        for (template, source) in spec.templates.iter().zip(&sources) {
            let destination = project_dir.join(template.dest_path);

            if let Some(parent) = destination.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }

            if !source.exists() {
                eprintln!("warning: template source not found: {}", source.display());
                report.skipped += 1;
                continue;
            }

            if source.is_dir() {
                copy_dir_recursive(source, &destination)?;
            } else {
                std::fs::copy(source, &destination).with_context(|| {
                    format!(
                        "failed to copy {} -> {}",
                        source.display(),
                        destination.display()
                    )
                })?;
            }
            report.copied += 1;
        }
    }

    Ok(report)
}

/// Recursively copy `src` into `dst`, overwriting files that already exist.
///
/// Merge semantics: entries present in `dst` but absent in `src` are left
/// alone.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst).with_context(|| format!("failed to create {}", dst.display()))?;

    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry.with_context(|| format!("failed to walk {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields children of src");
        let dest_path = dst.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&dest_path)
                .with_context(|| format!("failed to create {}", dest_path.display()))?;
        } else {
            std::fs::copy(entry.path(), &dest_path).with_context(|| {
                format!(
                    "failed to copy {} -> {}",
                    entry.path().display(),
                    dest_path.display()
                )
            })?;
        }
    }

    Ok(())
}
