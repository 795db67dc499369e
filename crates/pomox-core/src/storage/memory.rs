//! In-memory [`StateStore`], for tests and dry runs.

use std::sync::Mutex;

use super::StateStore;
use crate::error::Result;
use crate::timer::TimerState;

#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<Option<TimerState>>,
    pid: Mutex<Option<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `state`.
    pub fn with_state(state: TimerState) -> Self {
        let pid = state.daemon_pid;
        Self {
            state: Mutex::new(Some(state)),
            pid: Mutex::new(pid),
        }
    }
}

impl StateStore for MemoryStore {
    fn load_state(&self) -> TimerState {
        self.state
            .lock()
            .ok()
            .and_then(|s| s.clone())
            .unwrap_or_default()
    }

    fn save_state(&self, state: &TimerState) -> Result<()> {
        if let Ok(mut slot) = self.state.lock() {
            *slot = Some(state.clone());
        }
        Ok(())
    }

    fn load_pid(&self) -> Option<u32> {
        self.pid.lock().ok().and_then(|p| *p)
    }

    fn save_pid(&self, pid: u32) -> Result<()> {
        if let Ok(mut slot) = self.pid.lock() {
            *slot = Some(pid);
        }
        Ok(())
    }

    fn clear_pid(&self) -> Result<()> {
        if let Ok(mut slot) = self.pid.lock() {
            *slot = None;
        }
        Ok(())
    }
}
