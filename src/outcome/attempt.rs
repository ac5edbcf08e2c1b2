// src/outcome/attempt.rs

//! Turn one command invocation into a [`BuildResult`].

use tracing::{debug, info};

use crate::errors::BuildcmdError;
use crate::exec::{CommandRunner, RunOptions};
use crate::outcome::{BuildResult, ResourceUsage};

/// A finished build attempt: its outcome and the captured output.
#[derive(Debug)]
pub struct BuildAttempt {
    pub result: BuildResult,
    /// Cleaned command output. Also filled in when the command exited
    /// non-zero; empty when the command could not be run at all.
    pub output: String,
}

/// Run `command` once through `runner` and classify what happened.
///
/// A zero exit is `successful`, anything else is `failed` with the error as
/// payload. Resource usage is attached when the child counters can be read;
/// it is only exact while no other children are reaped concurrently.
pub async fn attempt_build<R: CommandRunner + ?Sized>(
    runner: &mut R,
    command: &[String],
    options: RunOptions,
) -> BuildAttempt {
    let before = ResourceUsage::children()
        .inspect_err(|e| debug!(error = %e, "could not read child resource usage"))
        .ok();

    let outcome = runner.run(command, options).await;

    let rusage = before.and_then(|before| {
        ResourceUsage::children()
            .ok()
            .map(|after| after.since(&before))
    });

    let (result, output) = match outcome {
        Ok(output) => (BuildResult::successful(), output),
        Err(err) => {
            let output = match &err {
                BuildcmdError::CommandFailed { output, .. } => output.clone(),
                _ => String::new(),
            };
            (BuildResult::failed(err), output)
        }
    };

    let result = match rusage {
        Some(usage) => result.with_rusage(usage),
        None => result,
    };

    info!(?command, result = ?result, "build attempt finished");
    BuildAttempt { result, output }
}
