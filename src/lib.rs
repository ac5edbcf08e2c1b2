// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod outcome;
pub mod sumtype;

use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::validate::validate_command;
use crate::errors::BuildcmdError;
use crate::exec::{ProcessRunner, RunOptions};
use crate::outcome::{BuildReason, BuildResult, attempt_build};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the build reason for this invocation
/// - one command run through the execution engine
///
/// Returns the exit code the process should finish with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = config::load_optional(args.config.as_deref())?;
    let options = resolve_options(&args, &cfg);
    let command = resolve_command(&args, &cfg)?;

    if args.dry_run {
        print_dry_run(&command, options);
        return Ok(0);
    }

    let reason = reason_fields(&BuildReason::Cmdline)?;
    info!(reason = %reason, "build requested");

    let mut runner = ProcessRunner;
    let attempt = attempt_build(&mut runner, &command, options).await;

    if options.silent {
        print!("{}", attempt.output);
    }

    Ok(exit_code_for(&attempt.result))
}

/// The reason as a JSON object, the form it is logged in.
fn reason_fields(reason: &BuildReason) -> errors::Result<Value> {
    Ok(Value::Object(reason.to_mapping()?))
}

/// CLI flags can only switch options on; the config file supplies the rest.
fn resolve_options(args: &CliArgs, cfg: &ConfigFile) -> RunOptions {
    let from_file = cfg.run.options();
    RunOptions {
        use_pty: args.pty || from_file.use_pty,
        silent: args.silent || from_file.silent,
    }
}

/// The command after `--` wins over `[run].command`.
fn resolve_command(args: &CliArgs, cfg: &ConfigFile) -> errors::Result<Vec<String>> {
    let command = if args.command.is_empty() {
        cfg.run.command.clone().ok_or(BuildcmdError::EmptyCommand)?
    } else {
        args.command.clone()
    };
    validate_command(Some(&command))?;
    Ok(command)
}

/// 0 for successful/staged outcomes, the child's own exit code when it
/// failed with one in `1..=255`, 1 otherwise.
fn exit_code_for(result: &BuildResult) -> i32 {
    if result.is_ok() {
        return 0;
    }

    result
        .error()
        .and_then(|err| err.downcast_ref::<BuildcmdError>())
        .and_then(BuildcmdError::exit_code)
        .filter(|code| (1..=255).contains(code))
        .unwrap_or(1)
}

fn print_dry_run(command: &[String], options: RunOptions) {
    println!("buildcmd dry-run");
    println!("  command: {command:?}");
    println!("  use_pty: {}", options.use_pty);
    println!("  silent: {}", options.silent);

    debug!("dry-run complete (no execution)");
}
