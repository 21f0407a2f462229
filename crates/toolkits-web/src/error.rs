use std::path::PathBuf;

/// Domain errors with stable user-facing messages. Everything else travels as
/// `anyhow::Error` with context attached at the failing call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `--ai` selector names neither a known assistant nor `all`.
    #[error("invalid AI assistant: {given} (valid options: {valid})")]
    InvalidAssistant { given: String, valid: String },

    /// The bundled templates root could not be scanned for versions.
    #[error("failed to read template versions from {path}")]
    VersionScan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry has no template configuration for an assistant.
    /// Registry validation runs at startup, so this indicates drift between
    /// the assistant set and the template table.
    #[error("no template configuration found for {0}")]
    UnknownAssistantConfig(String),
}
