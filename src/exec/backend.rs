// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! Pipeline code talks to a `CommandRunner` instead of calling [`run_cmd`]
//! directly. That keeps the real process machinery in one place and lets
//! tests substitute a runner that records invocations and returns scripted
//! output without spawning anything.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::exec::RunOptions;
use crate::exec::runner::run_cmd;

/// Trait abstracting how a build command is executed.
///
/// Production code uses [`ProcessRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send {
    /// Run `command` once, returning its cleaned output or the failure.
    fn run<'a>(
        &'a mut self,
        command: &'a [String],
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Runner backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a [String],
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(run_cmd(command, options))
    }
}
