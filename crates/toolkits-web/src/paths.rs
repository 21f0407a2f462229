//! Templates-root discovery. The templates tree ships alongside the installed
//! binary, so the default root is `templates/` in the executable's directory.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default bundled templates root.
pub fn default_templates_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the current executable")?;
    let dir = exe
        .parent()
        .context("executable has no parent directory")?;
    Ok(dir.join("templates"))
}
