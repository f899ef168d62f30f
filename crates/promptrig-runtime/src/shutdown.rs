//! Graceful termination for inference child processes.
//!
//! Strategy: SIGTERM, wait out a grace period, then SIGKILL and reap
//! (reaping is required to avoid zombies). Windows has no SIGTERM
//! equivalent, so the process is terminated immediately there.

use std::io;
use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::Child;

#[cfg(unix)]
use tokio::time::timeout;

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// How long a child gets to honor SIGTERM before SIGKILL.
const GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Terminate a child process, escalating if the graceful signal is ignored.
pub(crate) async fn shutdown_child(child: &mut Child) -> io::Result<ExitStatus> {
    #[cfg(unix)]
    {
        shutdown_unix(child).await
    }

    #[cfg(not(unix))]
    {
        let _ = GRACE_PERIOD;
        child.kill().await?;
        child.wait().await
    }
}

#[cfg(unix)]
async fn shutdown_unix(child: &mut Child) -> io::Result<ExitStatus> {
    let pid = child
        .id()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "child has no PID"))?;

    if let Err(e) = signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM) {
        // ESRCH: the process already exited on its own
        if e == nix::errno::Errno::ESRCH {
            return child.wait().await;
        }
        return Err(io::Error::other(e));
    }

    if let Ok(result) = timeout(GRACE_PERIOD, child.wait()).await {
        return result;
    }

    // Grace period elapsed without an exit - escalate
    child.kill().await?;
    child.wait().await
}

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use tokio::process::Command;
    use tokio::time::sleep;

    use super::*;

    #[tokio::test]
    async fn terminates_a_sigterm_responsive_process() {
        let mut child = Command::new("sleep")
            .arg("30")
            .spawn()
            .expect("failed to spawn sleep");

        let status = shutdown_child(&mut child).await.unwrap();
        assert!(!status.success());
    }

    #[tokio::test]
    async fn handles_an_already_exited_process() {
        let mut child = Command::new("true").spawn().expect("failed to spawn true");

        // Give it time to exit on its own
        sleep(Duration::from_millis(100)).await;

        assert!(shutdown_child(&mut child).await.is_ok());
    }
}
