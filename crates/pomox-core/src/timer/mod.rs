mod clock;
mod controller;
mod daemon;
mod jobs;
mod state;

pub use clock::{
    compute_end_time, format_duration, format_remaining, ms_to_minutes_ceil, parse_duration_ms,
    remaining_time, RemainingTime, MS_PER_MINUTE,
};
pub use controller::{finish_timer, TimerController, TimerPlan, TimerStatus};
pub use daemon::run_daemon;
pub use jobs::{DetachedJobs, JobControl};
pub use state::TimerState;
