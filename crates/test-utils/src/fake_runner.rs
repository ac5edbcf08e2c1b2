use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use buildcmd::errors::{BuildcmdError, Result};
use buildcmd::exec::{CommandRunner, RunOptions};

/// A fake runner that:
/// - records every command it was asked to run, with its options
/// - answers from a queue of scripted results (success with empty output
///   once the queue is empty).
#[derive(Clone, Default)]
pub struct FakeRunner {
    pub calls: Arc<Mutex<Vec<(Vec<String>, RunOptions)>>>,
    script: Arc<Mutex<VecDeque<Result<String>>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful run producing `output`.
    pub fn succeed_with(self, output: &str) -> Self {
        self.push(Ok(output.to_string()));
        self
    }

    /// Queue a run exiting with `code` after printing `output`.
    pub fn fail_with(self, code: i32, output: &str) -> Self {
        self.push(Err(BuildcmdError::CommandFailed {
            code,
            command: Vec::new(),
            output: output.to_string(),
        }));
        self
    }

    /// Queue an arbitrary result.
    pub fn push(&self, result: Result<String>) {
        self.script.lock().unwrap().push_back(result);
    }

    pub fn recorded(&self) -> Vec<(Vec<String>, RunOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a mut self,
        command: &'a [String],
        options: RunOptions,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let calls = Arc::clone(&self.calls);
        let script = Arc::clone(&self.script);

        Box::pin(async move {
            calls.lock().unwrap().push((command.to_vec(), options));
            let next = script.lock().unwrap().pop_front();
            match next {
                // Scripted failures don't know the command; fill it in.
                Some(Err(BuildcmdError::CommandFailed { code, output, .. })) => {
                    Err(BuildcmdError::CommandFailed {
                        code,
                        command: command.to_vec(),
                        output,
                    })
                }
                Some(other) => other,
                None => Ok(String::new()),
            }
        })
    }
}
