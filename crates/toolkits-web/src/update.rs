//! Updater — reinstalls the latest templates for every assistant.

use anyhow::Result;
use std::path::Path;

use crate::install::{self, InstallReport};
use crate::registry::{Registry, Selector};
use crate::versions;

/// Outcome of an update run.
#[derive(Debug)]
pub struct UpdateOutcome {
    pub updated: bool,
    pub version: String,
    pub report: InstallReport,
}

/// Update the project to the latest template version.
///
/// No installed-version marker exists to compare against, so this is an
/// unconditional full reinstall for all assistants and `updated` is always
/// true.
pub fn update_to_latest(
    registry: &Registry,
    templates_root: &Path,
    project_dir: &Path,
) -> Result<UpdateOutcome> {
    let version = versions::latest_version(templates_root)?;
    let report = install::install(
        registry,
        templates_root,
        project_dir,
        Selector::All,
        Some(&version),
    )?;

    Ok(UpdateOutcome {
        updated: true,
        version,
        report,
    })
}
