use std::process::{Child, Command, Stdio};

use super::ProcessError;
use crate::flags::Flags;

/// How a finished child left the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitKind {
    Exited(i32),
    Signaled(i32),
}

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Self {
        ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        }
    }

    /// Launch `argv` as an external program and block until the child is
    /// gone. A stopped (suspended) child is not gone; the wait resumes
    /// until it has exited or been killed by a signal.
    pub fn spawn_process(&self, argv: &[&str]) -> Result<(), ProcessError> {
        let Some(program) = argv.first() else {
            return Ok(());
        };

        let mut command = Command::new(program);
        command
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    if !self.quiet_mode {
                        eprintln!("rill: command not found: {}", program);
                    }
                    return Ok(());
                }
                return Err(e.into());
            }
        };

        wait_for_exit(&mut child)?;
        Ok(())
    }
}

/// Wait until the child has exited or been terminated by a signal.
///
/// `WUNTRACED` makes waitpid report stopped children too; those reports
/// are not terminal, so the loop goes back to waiting. `EINTR` likewise.
#[cfg(unix)]
fn wait_for_exit(child: &mut Child) -> Result<ExitKind, ProcessError> {
    let pid = child.id() as libc::pid_t;
    loop {
        let mut status: libc::c_int = 0;
        let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED) };
        if rc == -1 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::EINTR) {
                continue;
            }
            return Err(ProcessError::WaitFailed(err.to_string()));
        }
        if libc::WIFEXITED(status) {
            return Ok(ExitKind::Exited(libc::WEXITSTATUS(status)));
        }
        if libc::WIFSIGNALED(status) {
            return Ok(ExitKind::Signaled(libc::WTERMSIG(status)));
        }
    }
}

#[cfg(not(unix))]
fn wait_for_exit(child: &mut Child) -> Result<ExitKind, ProcessError> {
    let status = child
        .wait()
        .map_err(|e| ProcessError::WaitFailed(e.to_string()))?;
    Ok(ExitKind::Exited(status.code().unwrap_or(-1)))
}
