// src/config/loader.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{BuildcmdError, Result};

/// Load a configuration file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization. Use [`load_and_validate`] for the
/// checked form.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path(&path)?;
    ConfigFile::try_from(raw_config)
}

/// Load the config the CLI asked for.
///
/// - `Some(path)`: the file must exist.
/// - `None`: [`default_config_path`] is used if it exists; otherwise all
///   defaults apply.
pub fn load_optional(explicit: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return load_and_validate(path);
    }

    let path = default_config_path();
    match load_and_validate(&path) {
        Err(BuildcmdError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file; using defaults");
            Ok(ConfigFile::default())
        }
        other => other,
    }
}

/// `Buildcmd.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Buildcmd.toml")
}
