mod config;
mod file_store;
mod memory;
pub mod merge;

pub use config::{
    AppsConfig, CommandsConfig, Config, FocusmateConfig, IntegrationsConfig, SlackConfig,
    SlackWorkspace,
};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::timer::TimerState;

/// Returns `~/.pomox/`, or `$POMOX_HOME` when set.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("POMOX_HOME") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(".pomox"),
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Persistence for the running timer and its background process id.
///
/// Loads never fail: a missing or unreadable record reads as "no timer".
/// Every write replaces the whole record.
pub trait StateStore {
    fn load_state(&self) -> TimerState;

    fn save_state(&self, state: &TimerState) -> Result<()>;

    /// Overwrite the stored state with [`TimerState::empty`].
    fn clear_state(&self) -> Result<()> {
        self.save_state(&TimerState::empty())
    }

    fn load_pid(&self) -> Option<u32>;

    fn save_pid(&self, pid: u32) -> Result<()>;

    /// Forget the process id. Clearing an absent id is not an error.
    fn clear_pid(&self) -> Result<()>;
}
