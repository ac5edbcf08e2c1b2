// src/config/model.rs

use serde::Deserialize;

use crate::exec::RunOptions;

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [run]
/// use_pty = true
/// silent = false
/// command = ["makepkg", "--syncdeps"]
/// ```
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub run: RunSection,
}

/// `[run]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunSection {
    /// Attach the command to a pseudo-terminal.
    #[serde(default)]
    pub use_pty: bool,

    /// Don't echo command output while it runs.
    #[serde(default)]
    pub silent: bool,

    /// Command to run when none is given on the command line.
    #[serde(default)]
    pub command: Option<Vec<String>>,
}

impl RunSection {
    pub fn options(&self) -> RunOptions {
        RunOptions {
            use_pty: self.use_pty,
            silent: self.silent,
        }
    }
}

/// Validated configuration. Build one with `ConfigFile::try_from(raw)` or
/// [`crate::config::load_and_validate`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub run: RunSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(run: RunSection) -> Self {
        Self { run }
    }
}
