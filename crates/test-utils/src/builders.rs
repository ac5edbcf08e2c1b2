
use buildcmd::config::{ConfigFile, RawConfigFile, RunSection};
use buildcmd::exec::RunOptions;

/// Argument vector running `script` through `sh -c`.
///
/// The engine itself never involves a shell; tests use one to script exit
/// codes, stderr writes and raw bytes.
pub fn sh(script: &str) -> Vec<String> {
    vec!["sh".to_string(), "-c".to_string(), script.to_string()]
}

/// Argument vector from string slices.
pub fn argv(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Pipe mode, no live echo.
pub fn quiet_pipe() -> RunOptions {
    RunOptions {
        use_pty: false,
        silent: true,
    }
}

/// Pty mode, no live echo.
pub fn quiet_pty() -> RunOptions {
    RunOptions {
        use_pty: true,
        silent: true,
    }
}

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                run: RunSection::default(),
            },
        }
    }

    pub fn use_pty(mut self, val: bool) -> Self {
        self.config.run.use_pty = val;
        self
    }

    pub fn silent(mut self, val: bool) -> Self {
        self.config.run.silent = val;
        self
    }

    pub fn command(mut self, items: &[&str]) -> Self {
        self.config.run.command = Some(argv(items));
        self
    }

    pub fn build_raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("builder produced invalid config")
    }
}
