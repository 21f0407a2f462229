//! Static registry of supported assistants and their template layouts.
//!
//! Each assistant maps to an ordered list of `TemplateMapping` pairs tying a
//! template name inside a version directory to an install path relative to
//! the target project root. Pairing source and destination in one value rules
//! out the index drift that two parallel lists would allow.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;
use crate::versions::LATEST;

/// The fixed set of supported AI coding assistants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assistant {
    Claude,
    Cursor,
    Windsurf,
    Antigravity,
    Copilot,
}

impl Assistant {
    /// All supported assistants, in registry order.
    pub const ALL: [Assistant; 5] = [
        Assistant::Claude,
        Assistant::Cursor,
        Assistant::Windsurf,
        Assistant::Antigravity,
        Assistant::Copilot,
    ];

    /// Short key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Assistant::Claude => "claude",
            Assistant::Cursor => "cursor",
            Assistant::Windsurf => "windsurf",
            Assistant::Antigravity => "antigravity",
            Assistant::Copilot => "copilot",
        }
    }

    /// Product name shown in the interactive prompt.
    pub fn display_name(self) -> &'static str {
        match self {
            Assistant::Claude => "Claude Code",
            Assistant::Cursor => "Cursor",
            Assistant::Windsurf => "Windsurf",
            Assistant::Antigravity => "Antigravity",
            Assistant::Copilot => "GitHub Copilot",
        }
    }
}

impl fmt::Display for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Assistant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Assistant::ALL
            .into_iter()
            .find(|a| a.key() == s)
            .ok_or_else(|| Error::InvalidAssistant {
                given: s.to_string(),
                valid: valid_options(),
            })
    }
}

/// The `--ai` value: a single assistant or the `all` meta-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    One(Assistant),
    All,
}

impl Selector {
    /// Parse a selector, accepting every assistant key plus `all`.
    ///
    /// Validation happens here, before any filesystem activity.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s == "all" {
            Ok(Selector::All)
        } else {
            s.parse().map(Selector::One)
        }
    }

    /// Expand to the concrete assistants to process, in registry order.
    pub fn resolve(self) -> Vec<Assistant> {
        match self {
            Selector::One(assistant) => vec![assistant],
            Selector::All => Assistant::ALL.to_vec(),
        }
    }
}

/// Comma-separated list of accepted `--ai` values, for error messages.
pub fn valid_options() -> String {
    let mut keys: Vec<&str> = Assistant::ALL.iter().map(|a| a.key()).collect();
    keys.push("all");
    keys.join(", ")
}

/// One template of an assistant: its name inside a version directory and the
/// path it installs to, relative to the project root.
#[derive(Debug, Clone, Copy)]
pub struct TemplateMapping {
    pub source_name: &'static str,
    pub dest_path: &'static str,
}

/// Everything the installer needs to know about one assistant.
#[derive(Debug, Clone)]
pub struct AssistantSpec {
    pub assistant: Assistant,
    pub description: &'static str,
    pub templates: Vec<TemplateMapping>,
}

/// Immutable table of per-assistant template layouts, built once at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    specs: Vec<AssistantSpec>,
}

impl Registry {
    /// Build the registry, failing fast if any assistant lacks an entry.
    pub fn new() -> anyhow::Result<Self> {
        let registry = Self::builtin();
        registry.validate()?;
        Ok(registry)
    }

    fn builtin() -> Self {
        let mapping = |source_name, dest_path| TemplateMapping {
            source_name,
            dest_path,
        };

        Registry {
            specs: vec![
                AssistantSpec {
                    assistant: Assistant::Claude,
                    description: "Claude Code skill",
                    templates: vec![mapping("eai-web.claude", ".claude/skills/eai-web")],
                },
                AssistantSpec {
                    assistant: Assistant::Cursor,
                    description: "Cursor commands (main + specialized)",
                    templates: vec![
                        mapping("eai-web.cursor.md", ".cursor/commands/eai-web.md"),
                        mapping(
                            "eai-web-design.cursor.md",
                            ".cursor/commands/eai-web-design.md",
                        ),
                        mapping("eai-web-code.cursor.md", ".cursor/commands/eai-web-code.md"),
                    ],
                },
                AssistantSpec {
                    assistant: Assistant::Windsurf,
                    description: "Windsurf workflow",
                    templates: vec![mapping("eai-web.windsurf.md", ".windsurf/workflows/eai-web.md")],
                },
                AssistantSpec {
                    assistant: Assistant::Antigravity,
                    description: "Antigravity workflow and shared resources",
                    templates: vec![
                        mapping("eai-web.antigravity.md", ".agent/workflows/eai-web.md"),
                        mapping("eai-web.shared", ".shared/eai-web"),
                    ],
                },
                AssistantSpec {
                    assistant: Assistant::Copilot,
                    description: "GitHub Copilot prompt",
                    templates: vec![
                        mapping("eai-web.copilot.md", ".github/prompts/eai-web.prompt.md"),
                        mapping("eai-web.shared", ".shared/eai-web"),
                    ],
                },
            ],
        }
    }

    /// Validate that every assistant has a spec with at least one template.
    fn validate(&self) -> anyhow::Result<()> {
        for assistant in Assistant::ALL {
            let spec = self.specs.iter().find(|s| s.assistant == assistant);
            match spec {
                None => anyhow::bail!("registry has no entry for {assistant}"),
                Some(spec) if spec.templates.is_empty() => {
                    anyhow::bail!("registry entry for {assistant} has no templates")
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Look up an assistant's spec.
    pub fn spec(&self, assistant: Assistant) -> Result<&AssistantSpec, Error> {
        self.specs
            .iter()
            .find(|s| s.assistant == assistant)
            .ok_or_else(|| Error::UnknownAssistantConfig(assistant.to_string()))
    }

    /// Absolute source paths for an assistant's templates at a given version.
    ///
    /// The base directory is `templates_root/{version}`, defaulting to the
    /// `latest` alias. Returns one path per template mapping, in order.
    pub fn source_paths(
        &self,
        assistant: Assistant,
        templates_root: &Path,
        version: Option<&str>,
    ) -> Result<Vec<PathBuf>, Error> {
        let base = templates_root.join(version.unwrap_or(LATEST));
        Ok(self
            .spec(assistant)?
            .templates
            .iter()
            .map(|t| base.join(t.source_name))
            .collect())
    }
}
