// src/exec/channel.rs

//! Output channel setup for a child process.
//!
//! In pty mode the child gets the slave side of a fresh pseudo-terminal as
//! stdin, stdout and stderr, so tools that check `isatty` keep their colours,
//! progress bars and line buffering. In pipe mode stdin is `/dev/null` and
//! stdout/stderr share the write end of one anonymous pipe.
//!
//! Either way the parent ends up holding only the read side: every parent copy
//! of the child's end is closed right after spawn, otherwise the reader would
//! never observe end of stream.

use std::fs::File;
use std::os::fd::{AsRawFd, OwnedFd};
use std::process::{Child, Command, Stdio};

use nix::fcntl::{FcntlArg, FdFlag, fcntl};
use nix::pty::{Winsize, openpty};
use nix::sys::termios::Termios;
use tracing::debug;

use crate::errors::{BuildcmdError, Result};

/// A running child plus the parent's read handle on its combined output.
#[derive(Debug)]
pub struct AttachedChild {
    pub child: Child,
    pub reader: File,
}

/// Spawn `command` (program followed by its arguments, no shell) with its
/// output routed into a pty or a pipe.
pub fn spawn_attached(command: &[String], use_pty: bool) -> Result<AttachedChild> {
    let (program, args) = command.split_first().ok_or(BuildcmdError::EmptyCommand)?;

    let mut cmd = Command::new(program);
    cmd.args(args);

    let reader = if use_pty {
        attach_pty(&mut cmd)?
    } else {
        attach_pipe(&mut cmd)?
    };

    let child = cmd.spawn()?;
    // `Command` owns the child-side descriptors until it is dropped.
    drop(cmd);

    debug!(pid = child.id(), program = %program, use_pty, "spawned child");

    Ok(AttachedChild { child, reader })
}

fn attach_pty(cmd: &mut Command) -> Result<File> {
    let pty = openpty(None::<&Winsize>, None::<&Termios>)?;
    debug!(
        master_fd = pty.master.as_raw_fd(),
        slave_fd = pty.slave.as_raw_fd(),
        "allocated pty"
    );

    set_cloexec(&pty.master)?;
    set_cloexec(&pty.slave)?;

    let slave_out = pty.slave.try_clone()?;
    let slave_err = pty.slave.try_clone()?;
    cmd.stdin(Stdio::from(pty.slave))
        .stdout(Stdio::from(slave_out))
        .stderr(Stdio::from(slave_err));

    Ok(File::from(pty.master))
}

fn attach_pipe(cmd: &mut Command) -> Result<File> {
    let (reader, writer) = std::io::pipe()?;
    let writer_err = writer.try_clone()?;
    cmd.stdin(Stdio::null())
        .stdout(Stdio::from(writer))
        .stderr(Stdio::from(writer_err));

    Ok(File::from(OwnedFd::from(reader)))
}

/// Keep the descriptor out of the child's (and its descendants') fd table;
/// the child only ever sees the copies dup'ed onto 0, 1 and 2.
fn set_cloexec(fd: &OwnedFd) -> Result<()> {
    fcntl(fd.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC))?;
    Ok(())
}
