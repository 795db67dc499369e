//! User-configured shell commands run at the start and end of a timer.

use std::time::Duration;

use tracing::{info, warn};

use super::shell::run_shell_command;

/// Ceiling for a single hook command.
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Run each command in order. Returns how many failed.
pub async fn run_commands(commands: &[String], timeout: Duration) -> usize {
    let mut failures = 0;
    for command in commands {
        info!("running hook command: {command}");
        if let Err(e) = run_shell_command(command, timeout).await {
            warn!("Command failed: {command}: {e}");
            failures += 1;
        }
    }
    failures
}
