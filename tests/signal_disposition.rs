// tests/signal_disposition.rs
//
// Kept in its own test binary: SIGCHLD disposition is process-wide and other
// tests spawning children concurrently would race with the checks here.

use nix::libc::c_int;
use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

use buildcmd::exec::run_cmd;
use buildcmd_test_utils::builders::{quiet_pipe, quiet_pty, sh};
use buildcmd_test_utils::with_timeout;

extern "C" fn note_child(_: c_int) {}

/// Swap `action` in and return whatever was installed before.
fn swap_sigchld(action: &SigAction) -> SigAction {
    // SAFETY: the only handlers installed here are SIG_DFL and `note_child`,
    // which does nothing and is therefore async-signal-safe.
    unsafe { sigaction(Signal::SIGCHLD, action) }.unwrap()
}

fn is_note_child(handler: SigHandler) -> bool {
    match handler {
        SigHandler::Handler(f) => f as usize == note_child as extern "C" fn(c_int) as usize,
        _ => false,
    }
}

#[tokio::test]
async fn sigchld_handler_is_untouched_by_runs() {
    let ours = SigAction::new(
        SigHandler::Handler(note_child),
        SaFlags::SA_RESTART,
        SigSet::empty(),
    );
    let default = SigAction::new(SigHandler::SigDfl, SaFlags::empty(), SigSet::empty());

    // Custom handler in place: one successful pty run, one failing pipe run.
    let original = swap_sigchld(&ours);
    with_timeout(run_cmd(&sh("echo one"), quiet_pty()))
        .await
        .unwrap();
    let err = with_timeout(run_cmd(&sh("exit 1"), quiet_pipe()))
        .await
        .unwrap_err();
    assert_eq!(err.exit_code(), Some(1));

    // Reading the disposition means installing one; default goes in next.
    let seen = swap_sigchld(&default);
    assert!(is_note_child(seen.handler()), "custom handler was replaced");

    // Default disposition in place: same two runs in the other modes.
    with_timeout(run_cmd(&sh("echo two"), quiet_pipe()))
        .await
        .unwrap();
    with_timeout(run_cmd(&sh("exit 2"), quiet_pty()))
        .await
        .unwrap_err();

    let seen = swap_sigchld(&original);
    assert!(matches!(seen.handler(), SigHandler::SigDfl));
}
