pub mod config;
pub mod daemon;
pub mod end;
pub mod setup;
pub mod start;
pub mod status;

use pomox_core::{DetachedJobs, FileStore, TimerController};

/// Controller over the real data directory and detached daemon processes.
pub(crate) fn controller() -> Result<TimerController<FileStore, DetachedJobs>, Box<dyn std::error::Error>> {
    Ok(TimerController::new(
        FileStore::open()?,
        DetachedJobs::current_exe()?,
    ))
}
