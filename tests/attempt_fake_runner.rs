// tests/attempt_fake_runner.rs

use buildcmd::errors::BuildcmdError;
use buildcmd::exec::ProcessRunner;
use buildcmd::outcome::{BuildStatus, attempt_build};
use buildcmd::sumtype::SumType;
use buildcmd_test_utils::builders::{argv, quiet_pipe, quiet_pty, sh};
use buildcmd_test_utils::{FakeRunner, init_tracing, with_timeout};

#[tokio::test]
async fn success_becomes_successful_outcome() {
    init_tracing();
    let mut runner = FakeRunner::new().succeed_with("built\n");
    let command = argv(&["makepkg", "--syncdeps"]);

    let attempt = attempt_build(&mut runner, &command, quiet_pty()).await;

    assert!(attempt.result.is_ok());
    assert_eq!(attempt.result.variant_name(), "successful");
    assert_eq!(attempt.output, "built\n");
    assert_eq!(runner.recorded(), vec![(command, quiet_pty())]);
}

#[tokio::test]
async fn non_zero_exit_becomes_failed_outcome() {
    let mut runner = FakeRunner::new().fail_with(2, "error: missing dep\n");
    let command = argv(&["makepkg"]);

    let attempt = attempt_build(&mut runner, &command, quiet_pipe()).await;

    assert!(!attempt.result.is_ok());
    assert_eq!(attempt.output, "error: missing dep\n");
    let err = attempt
        .result
        .error()
        .and_then(|e| e.downcast_ref::<BuildcmdError>())
        .expect("failed outcome carries the command error");
    assert_eq!(err.exit_code(), Some(2));
    match err {
        BuildcmdError::CommandFailed { command: failed, .. } => assert_eq!(failed, &command),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn runner_errors_fail_without_output() {
    let mut runner = FakeRunner::new();
    runner.push(Err(BuildcmdError::EmptyCommand));

    let attempt = attempt_build(&mut runner, &[], quiet_pipe()).await;

    assert!(matches!(attempt.result.status(), BuildStatus::Failed(_)));
    assert_eq!(attempt.output, "");
}

#[tokio::test]
async fn runs_are_recorded_in_order() {
    let mut runner = FakeRunner::new().succeed_with("a").fail_with(1, "b");

    let first = attempt_build(&mut runner, &argv(&["one"]), quiet_pipe()).await;
    let second = attempt_build(&mut runner, &argv(&["two"]), quiet_pty()).await;
    let third = attempt_build(&mut runner, &argv(&["three"]), quiet_pipe()).await;

    assert!(first.result.is_ok());
    assert!(!second.result.is_ok());
    assert!(third.result.is_ok());
    let names: Vec<String> = runner
        .recorded()
        .into_iter()
        .map(|(command, _)| command[0].clone())
        .collect();
    assert_eq!(names, ["one", "two", "three"]);
}

#[tokio::test]
async fn real_runner_attaches_resource_usage() {
    let mut runner = ProcessRunner;
    let attempt = with_timeout(attempt_build(&mut runner, &sh("echo hi; exit 2"), quiet_pipe())).await;

    assert_eq!(attempt.result.variant_name(), "failed");
    assert_eq!(attempt.output, "hi\n");
    assert!(attempt.result.rusage().is_some());
    assert!(attempt.result.describe().starts_with("<BuildResult.failed: "));
    assert!(attempt.result.describe().contains("rusage=cputime="));
}
