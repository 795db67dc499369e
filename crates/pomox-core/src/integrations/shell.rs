//! Thin wrappers around OS commands.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::{CoreError, Result};

/// Shell used for user-configured hook commands.
pub const SHELL: &str = "/bin/sh";

/// Run `program` with no stdio attached; a non-zero exit is an error.
pub(crate) async fn run_silent(service: &str, program: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| {
            CoreError::integration_with_source(service, format!("failed to execute {program}"), e)
        })?;

    if !status.success() {
        return Err(CoreError::integration(
            service,
            format!("{program} {} exited with {status}", args.join(" ")),
        ));
    }
    Ok(())
}

/// Run `program` and return its stdout; a non-zero exit is an error.
pub(crate) async fn capture(service: &str, program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|e| {
            CoreError::integration_with_source(service, format!("failed to execute {program}"), e)
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CoreError::integration(
            service,
            format!("{program} failed: {}", stderr.trim()),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run `command` through [`SHELL`] with inherited stdio.
///
/// The child is killed once `timeout` elapses.
pub async fn run_shell_command(command: &str, timeout: Duration) -> Result<()> {
    let mut child = Command::new(SHELL)
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            CoreError::integration_with_source("commands", format!("failed to spawn `{command}`"), e)
        })?;

    let outcome = tokio::time::timeout(timeout, child.wait()).await;
    match outcome {
        Ok(Ok(status)) if status.success() => Ok(()),
        Ok(Ok(status)) => Err(CoreError::integration(
            "commands",
            format!("`{command}` exited with {status}"),
        )),
        Ok(Err(e)) => Err(CoreError::integration_with_source(
            "commands",
            format!("failed waiting for `{command}`"),
            e,
        )),
        Err(_) => {
            let _ = child.kill().await;
            Err(CoreError::integration(
                "commands",
                format!("`{command}` timed out after {}s", timeout.as_secs_f32()),
            ))
        }
    }
}
