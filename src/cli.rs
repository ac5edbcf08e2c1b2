// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `buildcmd`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "buildcmd",
    version,
    about = "Run a build command, capture its output and report the outcome.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Buildcmd.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Attach the command to a pseudo-terminal.
    #[arg(long)]
    pub pty: bool,

    /// Don't echo output while the command runs; print it once it finishes.
    #[arg(long)]
    pub silent: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUILDCMD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve config and command, print them, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Program and arguments to run. Overrides `[run].command`.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
