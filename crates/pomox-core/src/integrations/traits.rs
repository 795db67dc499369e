use async_trait::async_trait;

use crate::error::Result;
use crate::storage::SlackWorkspace;

/// Every side effect a hook can trigger goes through this trait.
///
/// Implementations handle list arguments item by item: one app that fails
/// to open, or one workspace with a revoked token, is logged and skipped.
/// An `Err` means the whole integration failed; the hook runner logs it and
/// moves on to the next one.
#[async_trait]
pub trait Integrations: Send + Sync {
    /// Desktop notification that a timer of `duration_min` started.
    async fn notify_start(&self, duration_min: u64) -> Result<()>;

    /// Desktop notification that the timer finished.
    async fn notify_end(&self) -> Result<()>;

    async fn enable_focus_mode(&self) -> Result<()>;

    async fn disable_focus_mode(&self) -> Result<()>;

    async fn kill_apps(&self, apps: &[String]) -> Result<()>;

    async fn open_apps(&self, apps: &[String]) -> Result<()>;

    /// Set each workspace's focus emoji/text and mark the user away.
    async fn set_focus_status(&self, workspaces: &[SlackWorkspace]) -> Result<()>;

    /// Clear each workspace's status and restore automatic presence.
    async fn clear_status(&self, workspaces: &[SlackWorkspace]) -> Result<()>;

    async fn run_start_commands(&self, commands: &[String]) -> Result<()>;

    async fn run_end_commands(&self, commands: &[String]) -> Result<()>;
}
