//! toolkits-web — install versioned AI assistant templates into a project.
//! Re-exports all modules and contains the command flows behind `run()`.

pub mod cli;
pub mod error;
pub mod install;
pub mod paths;
pub mod registry;
pub mod update;
pub mod versions;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Select;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use cli::{Cli, Command};
use registry::{Assistant, Registry, Selector};

/// Create a spinner with a consistent style.
fn spinner(msg: &str) -> ProgressBar {
    let sp = ProgressBar::new_spinner();
    sp.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    sp.set_message(msg.to_string());
    sp.enable_steady_tick(std::time::Duration::from_millis(80));
    sp
}

/// Run the CLI with parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    let registry = Registry::new()?;

    let templates_root = match cli.templates_dir {
        Some(dir) => dir,
        None => paths::default_templates_dir()?,
    };

    match cli.command {
        Command::Init { ai, version } => init(
            &registry,
            &templates_root,
            ai.as_deref(),
            version.as_deref(),
        )?,
        Command::Versions => show_versions(&templates_root)?,
        Command::Update => update_all(&registry, &templates_root)?,
    }

    Ok(())
}

/// `init` — install templates for one assistant or all of them.
fn init(
    registry: &Registry,
    templates_root: &Path,
    ai: Option<&str>,
    version: Option<&str>,
) -> Result<()> {
    let selector = match ai {
        Some(value) => Selector::parse(value)?,
        None => prompt_for_assistant()?,
    };

    let project_dir = project_dir()?;

    let sp = spinner("Installing templates...");
    let result = install::install(registry, templates_root, &project_dir, selector, version);
    sp.finish_and_clear();
    let report = result?;

    println!("{}", style("Templates installed").green().bold());
    println!(
        "  {} template(s) copied, {} skipped",
        style(report.copied).cyan(),
        report.skipped
    );

    Ok(())
}

/// `versions` — list available template versions, newest first.
fn show_versions(templates_root: &Path) -> Result<()> {
    let versions = versions::list_versions(templates_root)?;

    println!("{}", style("Available versions").bold());
    for (index, version) in versions.iter().enumerate() {
        if index == 0 {
            println!(
                "  {} {} {}",
                style("*").green(),
                style(version).green().bold(),
                style("(latest)").yellow()
            );
        } else {
            println!("  {} {}", style("-").dim(), version);
        }
    }

    Ok(())
}

/// `update` — reinstall the latest templates for all assistants.
fn update_all(registry: &Registry, templates_root: &Path) -> Result<()> {
    let project_dir = project_dir()?;

    let sp = spinner("Checking for updates...");
    let result = update::update_to_latest(registry, templates_root, &project_dir);
    sp.finish_and_clear();
    let outcome = result?;

    if outcome.updated {
        println!(
            "{} {}",
            style("Updated to version").green().bold(),
            style(&outcome.version).cyan()
        );
        if outcome.report.skipped > 0 {
            println!("  {} template(s) skipped", outcome.report.skipped);
        }
    } else {
        println!("Already on latest version ({})", outcome.version);
    }

    Ok(())
}

/// Ask which assistant to install for when `--ai` was not given.
fn prompt_for_assistant() -> Result<Selector> {
    let mut labels: Vec<&str> = Assistant::ALL.iter().map(|a| a.display_name()).collect();
    labels.push("All assistants");

    let choice = Select::new()
        .with_prompt("Which AI assistant do you want to install templates for?")
        .items(&labels)
        .default(0)
        .interact()
        .context("assistant selection cancelled")?;

    Ok(if choice == Assistant::ALL.len() {
        Selector::All
    } else {
        Selector::One(Assistant::ALL[choice])
    })
}

fn project_dir() -> Result<PathBuf> {
    std::env::current_dir().context("failed to resolve the current directory")
}
