//! Background timer process management.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{CoreError, Result};

/// Launches and cancels the process that waits out a timer.
pub trait JobControl {
    /// Start a job that runs the timer for `duration_ms`. Returns its pid.
    fn launch(&self, duration_ms: u64) -> Result<u32>;

    /// Ask the job to terminate.
    fn cancel(&self, pid: u32) -> Result<()>;
}

/// Re-executes the current binary as `<program> daemon <ms>`, detached
/// from the invoking terminal.
#[derive(Debug, Clone)]
pub struct DetachedJobs {
    program: PathBuf,
}

impl DetachedJobs {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Jobs that run the currently executing binary.
    ///
    /// # Errors
    /// Returns an error if the executable path cannot be determined.
    pub fn current_exe() -> Result<Self> {
        Ok(Self::new(std::env::current_exe()?))
    }
}

impl JobControl for DetachedJobs {
    fn launch(&self, duration_ms: u64) -> Result<u32> {
        let mut command = Command::new(&self.program);
        command
            .arg("daemon")
            .arg(duration_ms.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn().map_err(|e| {
            CoreError::integration_with_source("daemon", "failed to start timer daemon", e)
        })?;
        debug!("spawned timer daemon pid {}", child.id());
        Ok(child.id())
    }

    fn cancel(&self, pid: u32) -> Result<()> {
        let output = Command::new("kill")
            .args(["-TERM", &pid.to_string()])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CoreError::integration_with_source("daemon", "failed to execute kill", e))?;

        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(CoreError::integration(
            "daemon",
            format!("kill -TERM {pid} failed: {}", stderr.trim()),
        ))
    }
}
