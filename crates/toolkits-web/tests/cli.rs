use assert_cmd::{Command, cargo_bin_cmd};
use assert_fs::TempDir;
use predicates::prelude::*;
use std::path::Path;

fn toolkits() -> Command {
    cargo_bin_cmd!("toolkits-web")
}

/// Populate `templates_root/{version}` with every registered template.
fn write_template_set(templates_root: &Path, version: &str) {
    let base = templates_root.join(version);
    std::fs::create_dir_all(&base).unwrap();

    for name in [
        "eai-web.cursor.md",
        "eai-web-design.cursor.md",
        "eai-web-code.cursor.md",
        "eai-web.windsurf.md",
        "eai-web.antigravity.md",
        "eai-web.copilot.md",
    ] {
        std::fs::write(base.join(name), format!("# {name} ({version})")).unwrap();
    }

    for dir in ["eai-web.claude", "eai-web.shared"] {
        let dir_path = base.join(dir);
        std::fs::create_dir_all(&dir_path).unwrap();
        std::fs::write(dir_path.join("SKILL.md"), format!("# {dir} ({version})")).unwrap();
    }
}

// -- Help & version --

#[test]
fn help_shows_usage() {
    toolkits()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Install AI assistant templates for web projects",
        ));
}

#[test]
fn version_shows_version() {
    toolkits()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// -- Versions --

#[test]
fn versions_lists_newest_first() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");
    for v in ["1.2", "1.10", "2.0"] {
        std::fs::create_dir_all(templates.join(v)).unwrap();
    }

    toolkits()
        .args(["--templates-dir", templates.to_str().unwrap(), "versions"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(latest)").and(predicate::function(|out: &str| {
                let pos = |needle| out.find(needle).unwrap_or(usize::MAX);
                pos("latest") < pos("2.0")
                    && pos("2.0") < pos("1.10")
                    && pos("1.10") < pos("1.2\n")
            })),
        );
}

#[test]
fn versions_fails_when_templates_root_missing() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("no-such-dir");

    toolkits()
        .args(["--templates-dir", templates.to_str().unwrap(), "versions"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read template versions"));
}

// -- Init --

#[test]
fn init_installs_claude_skill() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");
    let project = tmp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    toolkits()
        .args([
            "--templates-dir",
            templates.to_str().unwrap(),
            "init",
            "--ai",
            "claude",
        ])
        .current_dir(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates installed"));

    assert!(project.join(".claude/skills/eai-web/SKILL.md").is_file());
}

#[test]
fn init_all_installs_every_assistant() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");
    let project = tmp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    toolkits()
        .args([
            "--templates-dir",
            templates.to_str().unwrap(),
            "init",
            "--ai",
            "all",
        ])
        .current_dir(&project)
        .assert()
        .success();

    for dest in [
        ".claude/skills/eai-web",
        ".cursor/commands/eai-web.md",
        ".cursor/commands/eai-web-design.md",
        ".cursor/commands/eai-web-code.md",
        ".windsurf/workflows/eai-web.md",
        ".agent/workflows/eai-web.md",
        ".github/prompts/eai-web.prompt.md",
        ".shared/eai-web",
    ] {
        assert!(project.join(dest).exists(), "missing {dest}");
    }
}

#[test]
fn init_installs_pinned_version() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");
    write_template_set(&templates, "1.0");
    let project = tmp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    toolkits()
        .args([
            "--templates-dir",
            templates.to_str().unwrap(),
            "init",
            "--ai",
            "windsurf",
            "--version",
            "1.0",
        ])
        .current_dir(&project)
        .assert()
        .success();

    let content =
        std::fs::read_to_string(project.join(".windsurf/workflows/eai-web.md")).unwrap();
    assert!(content.contains("(1.0)"), "unexpected content: {content}");
}

#[test]
fn init_rejects_unknown_assistant() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");

    toolkits()
        .args([
            "--templates-dir",
            templates.to_str().unwrap(),
            "init",
            "--ai",
            "bogus",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid AI assistant: bogus").and(predicate::str::contains(
                "claude, cursor, windsurf, antigravity, copilot, all",
            )),
        );
}

#[test]
fn init_warns_and_continues_on_missing_source() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    // Version directory exists but holds no templates
    std::fs::create_dir_all(templates.join("latest")).unwrap();
    let project = tmp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    toolkits()
        .args([
            "--templates-dir",
            templates.to_str().unwrap(),
            "init",
            "--ai",
            "cursor",
        ])
        .current_dir(&project)
        .assert()
        .success()
        .stderr(predicate::str::contains("template source not found"));

    assert!(!project.join(".cursor/commands/eai-web.md").exists());
}

// -- Update --

#[test]
fn update_reinstalls_latest_for_all_assistants() {
    let tmp = TempDir::new().unwrap();
    let templates = tmp.path().join("templates");
    write_template_set(&templates, "latest");
    std::fs::create_dir_all(templates.join("1.0")).unwrap();
    let project = tmp.path().join("project");
    std::fs::create_dir_all(&project).unwrap();

    toolkits()
        .args(["--templates-dir", templates.to_str().unwrap(), "update"])
        .current_dir(&project)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Updated to version")
                .and(predicate::str::contains("latest")),
        );

    assert!(project.join(".claude/skills/eai-web/SKILL.md").is_file());
    assert!(project.join(".github/prompts/eai-web.prompt.md").is_file());
}
