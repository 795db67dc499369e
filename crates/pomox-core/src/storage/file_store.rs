//! JSON/text file implementation of [`StateStore`].

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{data_dir, StateStore};
use crate::error::Result;
use crate::timer::TimerState;

const STATE_FILE: &str = "state.json";
const PID_FILE: &str = "daemon.pid";

/// Stores `state.json` and `daemon.pid` in a single directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at [`data_dir`].
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self> {
        Ok(Self::new(data_dir()?))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    pub fn pid_path(&self) -> PathBuf {
        self.dir.join(PID_FILE)
    }
}

impl StateStore for FileStore {
    fn load_state(&self) -> TimerState {
        let path = self.state_path();
        let Ok(content) = std::fs::read_to_string(&path) else {
            return TimerState::empty();
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            debug!("ignoring unreadable state file {}: {e}", path.display());
            TimerState::empty()
        })
    }

    fn save_state(&self, state: &TimerState) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(self.state_path(), content)?;
        Ok(())
    }

    fn load_pid(&self) -> Option<u32> {
        let content = std::fs::read_to_string(self.pid_path()).ok()?;
        content.trim().parse().ok()
    }

    fn save_pid(&self, pid: u32) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.pid_path(), pid.to_string())?;
        Ok(())
    }

    fn clear_pid(&self) -> Result<()> {
        match std::fs::remove_file(self.pid_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
