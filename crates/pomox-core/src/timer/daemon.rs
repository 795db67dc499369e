//! The background half of a timer: `pomox daemon <ms>`.

use std::path::Path;
use std::time::Duration;

use tokio::time::Instant;
use tracing::info;

use super::clock::{ms_to_minutes_ceil, parse_duration_ms};
use super::controller::finish_timer;
use crate::error::Result;
use crate::hooks::run_start_hooks;
use crate::integrations::Integrations;
use crate::storage::{Config, StateStore};

/// Run start hooks, wait out the timer, then run end hooks and clear state.
///
/// The deadline is fixed on entry, so time spent in the start hooks counts
/// toward the timer. The config is read again after the wait so edits made
/// while the timer runs apply to the end hooks.
///
/// # Errors
/// Rejects an unparseable or non-positive duration before any hook runs.
pub async fn run_daemon<S: StateStore + ?Sized, I: Integrations + ?Sized>(
    raw_duration: &str,
    config_path: &Path,
    store: &S,
    integrations: &I,
) -> Result<()> {
    let duration_ms = parse_duration_ms(raw_duration)?;
    let minutes = ms_to_minutes_ceil(duration_ms)?;
    let deadline = Instant::now() + Duration::from_millis(duration_ms);
    info!("daemon started: {duration_ms} ms ({minutes} minutes)");

    let config = Config::load_from(config_path);
    run_start_hooks(&config, integrations, minutes).await;

    tokio::time::sleep_until(deadline).await;
    info!("timer elapsed");

    let config = Config::load_from(config_path);
    finish_timer(&config, store, integrations).await
}
