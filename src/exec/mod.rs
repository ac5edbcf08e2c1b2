// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs a single build command to completion and hands back its
//! combined, cleaned output.
//!
//! - [`channel`] allocates the child's output channel (pty or pipe) and
//!   spawns the process attached to it.
//! - [`runner`] owns the read loop, the reaping of the child and the
//!   conversion of a non-zero exit into [`BuildcmdError::CommandFailed`].
//! - [`sanitize`] turns the raw captured bytes into the text a terminal would
//!   have shown.
//! - [`backend`] provides the `CommandRunner` trait and the real
//!   `ProcessRunner`, which tests can replace with a fake implementation.
//!
//! [`BuildcmdError::CommandFailed`]: crate::errors::BuildcmdError::CommandFailed

pub mod backend;
pub mod channel;
pub mod runner;
pub mod sanitize;

pub use backend::{CommandRunner, ProcessRunner};
pub use runner::run_cmd;
pub use sanitize::clean_output;

/// How a single command invocation is wired up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Attach the child to a pseudo-terminal instead of a pipe.
    pub use_pty: bool,
    /// Do not mirror the child's output to stderr while it runs.
    pub silent: bool,
}
