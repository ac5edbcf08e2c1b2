// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{BuildcmdError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = BuildcmdError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.run))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_command(cfg.run.command.as_deref())?;
    Ok(())
}

/// A configured command needs a non-blank program name.
pub fn validate_command(command: Option<&[String]>) -> Result<()> {
    let Some(command) = command else {
        return Ok(());
    };

    match command.first() {
        None => Err(BuildcmdError::ConfigError(
            "[run].command must not be empty".to_string(),
        )),
        Some(program) if program.trim().is_empty() => Err(BuildcmdError::ConfigError(
            "[run].command has a blank program name".to_string(),
        )),
        Some(_) => Ok(()),
    }
}
