// src/exec/runner.rs

//! Run one command to completion and collect its output.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use nix::errno::Errno;
use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::errors::{BuildcmdError, Result};
use crate::exec::RunOptions;
use crate::exec::channel::{AttachedChild, spawn_attached};
use crate::exec::sanitize::clean_output;

const READ_CHUNK: usize = 4096;

/// `^O` (shift-in). Some build tools emit it around their output; it is
/// dropped from both the captured text and the live echo.
const SHIFT_IN: u8 = 0x0f;

/// Run `command` and return its combined stdout/stderr as cleaned text.
///
/// - No shell is involved: `command[0]` is the program, the rest are its
///   arguments.
/// - Unless `options.silent` is set, output is mirrored to stderr as it
///   arrives.
/// - A non-zero exit yields [`BuildcmdError::CommandFailed`] carrying the exit
///   code, the command and the same cleaned text. A child killed by signal `N`
///   reports code `-N`.
///
/// The child is reaped through its own handle on a blocking worker while the
/// output channel is drained here; no process-wide signal disposition is
/// touched, so concurrent calls do not interfere with each other or with
/// other SIGCHLD users in the process.
pub async fn run_cmd<S: AsRef<str>>(command: &[S], options: RunOptions) -> Result<String> {
    let command: Vec<String> = command.iter().map(|s| s.as_ref().to_owned()).collect();
    debug!(
        ?command,
        use_pty = options.use_pty,
        silent = options.silent,
        "running command"
    );

    let AttachedChild { mut child, reader } = spawn_attached(&command, options.use_pty)?;
    let pid = child.id();
    let waiter = tokio::task::spawn_blocking(move || child.wait());

    let echo = (!options.silent).then(tokio::io::stderr);
    let drained = drain(File::from_std(reader), echo).await;

    // Reap before surfacing a read error so the child never lingers as a zombie.
    let status = waiter.await.map_err(anyhow::Error::from)??;
    let raw = drained?;

    let code = exit_code(status);
    info!(pid, exit_code = code, bytes = raw.len(), "command exited");

    let output = clean_output(&raw);
    if code != 0 {
        warn!(?command, exit_code = code, "command failed");
        return Err(BuildcmdError::CommandFailed {
            code,
            command,
            output,
        });
    }

    Ok(output)
}

/// Read `reader` until end of stream, returning everything read with `^O`
/// removed. Each chunk is also written to `echo` when one is given.
///
/// End of stream is either a zero-length read (pipe) or `EIO` (pty master
/// once the last slave descriptor is closed).
pub(crate) async fn drain<R, W>(mut reader: R, mut echo: Option<W>) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut out = Vec::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if is_pty_closed(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let mut chunk = buf[..n].to_vec();
        chunk.retain(|&b| b != SHIFT_IN);
        if chunk.is_empty() {
            continue;
        }

        if let Some(echo) = echo.as_mut() {
            echo.write_all(&chunk).await?;
            echo.flush().await?;
        }
        out.extend_from_slice(&chunk);
    }

    Ok(out)
}

fn is_pty_closed(err: &io::Error) -> bool {
    err.raw_os_error() == Some(Errno::EIO as i32)
}

fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}
