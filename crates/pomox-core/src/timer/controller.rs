//! Foreground timer lifecycle: start, status, end.
//!
//! The controller never waits out a timer itself. `start` records the state
//! and hands the wait to a [`JobControl`] job; `end` cancels that job and
//! runs the end hooks in the foreground.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::clock::{compute_end_time, remaining_time, RemainingTime, MS_PER_MINUTE};
use super::jobs::JobControl;
use super::state::TimerState;
use crate::error::{CoreError, Result, ValidationError};
use crate::hooks::run_end_hooks;
use crate::integrations::{ActiveSession, Integrations};
use crate::storage::{Config, StateStore};

/// What a start request resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerPlan {
    pub duration_ms: u64,
    pub end_time: DateTime<Utc>,
}

impl TimerPlan {
    /// A plain timer of `minutes` starting at `now`.
    ///
    /// # Errors
    /// Rejects a zero duration.
    pub fn minutes(now: DateTime<Utc>, minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::duration("must be greater than zero"));
        }
        Ok(Self {
            duration_ms: u64::from(minutes) * MS_PER_MINUTE,
            end_time: compute_end_time(now, minutes),
        })
    }

    /// A timer that runs until `session` ends.
    ///
    /// # Errors
    /// Rejects a session that has already ended.
    pub fn from_session(session: &ActiveSession) -> Result<Self, ValidationError> {
        if session.remaining_ms <= 0 {
            return Err(ValidationError::duration("session has already ended"));
        }
        Ok(Self {
            duration_ms: session.remaining_ms as u64,
            end_time: session.end_time,
        })
    }

    /// Duration rounded up to whole minutes.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_ms.div_ceil(MS_PER_MINUTE)
    }
}

/// Result of a status query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Ready,
    Running(RemainingTime),
    /// Time is up but the end hooks have not finished yet.
    Completing,
}

impl std::fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimerStatus::Ready => f.write_str("Ready"),
            TimerStatus::Running(remaining) => write!(f, "{remaining}"),
            TimerStatus::Completing => f.write_str("Completing..."),
        }
    }
}

pub struct TimerController<S, J> {
    store: S,
    jobs: J,
}

impl<S: StateStore, J: JobControl> TimerController<S, J> {
    pub fn new(store: S, jobs: J) -> Self {
        Self { store, jobs }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> TimerState {
        self.store.load_state()
    }

    /// Record a new active timer and launch its background job.
    ///
    /// # Errors
    /// [`CoreError::AlreadyActive`] if a timer is running; otherwise any
    /// storage or launch failure, in which case nothing stays recorded.
    pub fn start(&self, now: DateTime<Utc>, plan: TimerPlan) -> Result<TimerState> {
        let current = self.store.load_state();
        if current.active {
            return Err(CoreError::AlreadyActive {
                end_time: current.end_time.unwrap_or(now),
            });
        }

        let mut state = TimerState::running(now, plan.end_time, plan.duration_minutes());
        self.store.save_state(&state)?;

        let pid = match self.jobs.launch(plan.duration_ms) {
            Ok(pid) => pid,
            Err(e) => {
                self.discard_state();
                return Err(e);
            }
        };

        if let Err(e) = self.store.save_pid(pid) {
            // An unrecorded daemon cannot be stopped by `end`.
            if let Err(cancel) = self.jobs.cancel(pid) {
                warn!("could not stop timer daemon {pid}: {cancel}");
            }
            self.discard_state();
            return Err(e);
        }

        state.daemon_pid = Some(pid);
        self.store.save_state(&state)?;
        info!("timer started: {} minutes, daemon pid {pid}", state.duration);
        Ok(state)
    }

    fn discard_state(&self) {
        if let Err(e) = self.store.clear_state() {
            warn!("could not clear timer state: {e}");
        }
    }

    pub fn status(&self, now: DateTime<Utc>) -> TimerStatus {
        match remaining_time(&self.store.load_state(), now) {
            None => TimerStatus::Ready,
            Some(r) if r.is_zero() => TimerStatus::Completing,
            Some(r) => TimerStatus::Running(r),
        }
    }

    /// End the running timer early. Returns `false` if none was running.
    ///
    /// # Errors
    /// Only storage failures while clearing; hook and cancel failures are
    /// logged.
    pub async fn end<I: Integrations + ?Sized>(
        &self,
        config: &Config,
        integrations: &I,
    ) -> Result<bool> {
        if !self.store.load_state().active {
            return Ok(false);
        }

        if let Some(pid) = self.store.load_pid() {
            if let Err(e) = self.jobs.cancel(pid) {
                warn!("could not stop timer daemon {pid} (probably already gone): {e}");
            }
        }

        finish_timer(config, &self.store, integrations).await?;
        Ok(true)
    }
}

/// Run the end hooks, then forget the timer and its daemon.
///
/// Both records are cleared even if the first clear fails.
///
/// # Errors
/// Returns the first storage failure.
pub async fn finish_timer<S: StateStore + ?Sized, I: Integrations + ?Sized>(
    config: &Config,
    store: &S,
    integrations: &I,
) -> Result<()> {
    run_end_hooks(config, integrations).await;

    let state = store.clear_state();
    let pid = store.clear_pid();
    state?;
    pid?;
    info!("timer cleared");
    Ok(())
}
