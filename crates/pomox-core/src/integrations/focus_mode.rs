//! macOS Focus mode, toggled through two user-created Shortcuts.

use tracing::debug;

use super::shell::{capture, run_silent};
use crate::error::{CoreError, Result};

pub const ENABLE_SHORTCUT: &str = "PomoxEnableFocus";
pub const DISABLE_SHORTCUT: &str = "PomoxDisableFocus";

const SERVICE: &str = "focus-mode";

pub async fn enable_focus_mode() -> Result<()> {
    run_shortcut(ENABLE_SHORTCUT, "enable").await
}

pub async fn disable_focus_mode() -> Result<()> {
    run_shortcut(DISABLE_SHORTCUT, "disable").await
}

async fn run_shortcut(name: &str, verb: &str) -> Result<()> {
    run_silent(SERVICE, "shortcuts", &["run", name])
        .await
        .map_err(|e| {
            debug!("shortcut {name} failed: {e}");
            CoreError::integration(
                SERVICE,
                format!("Failed to {verb} Focus Mode. Run \"pomox setup\" to install shortcuts."),
            )
        })
}

/// Whether both shortcuts appear in `shortcuts list` output.
pub fn shortcuts_present(list_output: &str) -> bool {
    list_output.contains(ENABLE_SHORTCUT) && list_output.contains(DISABLE_SHORTCUT)
}

/// `false` when either shortcut is missing or `shortcuts` cannot run.
pub async fn check_shortcuts_installed() -> bool {
    match capture(SERVICE, "shortcuts", &["list"]).await {
        Ok(out) => shortcuts_present(&out),
        Err(e) => {
            debug!("could not list shortcuts: {e}");
            false
        }
    }
}
