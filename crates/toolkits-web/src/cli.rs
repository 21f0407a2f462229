//! CLI argument parsing with clap. Defines the `Cli` struct and `Command` enum.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "toolkits-web",
    version,
    about = "Install AI assistant templates for web projects",
    after_help = "Examples:\n  toolkits-web init\n  toolkits-web init --ai claude\n  toolkits-web init --ai all --version 1.2\n  toolkits-web versions\n  toolkits-web update"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Override the bundled templates directory (default: templates/ next to the executable)
    #[arg(long, global = true, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install templates for one assistant or all of them
    Init {
        /// Assistant to install for (claude, cursor, windsurf, antigravity, copilot, all)
        #[arg(long)]
        ai: Option<String>,

        /// Template version to install (default: latest)
        #[arg(long)]
        version: Option<String>,
    },

    /// List available template versions, newest first
    Versions,

    /// Reinstall the latest templates for all assistants
    Update,
}
