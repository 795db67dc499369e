//! # Pomox Core Library
//!
//! Core logic for the `pomox` focus timer. The CLI binary is a thin layer
//! over this crate: it parses arguments, prints results, and picks the
//! concrete store and integrations.
//!
//! ## Architecture
//!
//! - **Timer**: wall-clock arithmetic, the persisted [`TimerState`], and the
//!   [`TimerController`] that starts and ends timers. The wait itself happens
//!   in a detached background process ([`run_daemon`]).
//! - **Storage**: JSON config merged over defaults, and the state/pid files
//!   under the data directory.
//! - **Integrations**: macOS side effects (Focus mode, notifications, app
//!   control, shell commands) and the Slack and Focusmate HTTP APIs, behind
//!   the [`Integrations`] trait.
//! - **Hooks**: the ordered start and end sequences that drive integrations.
//!
//! ## Key Components
//!
//! - [`TimerController`]: start, status and early end
//! - [`Config`]: user configuration
//! - [`FileStore`]: on-disk timer state
//! - [`SystemIntegrations`]: the production [`Integrations`]

pub mod error;
pub mod hooks;
pub mod integrations;
pub mod storage;
pub mod timer;

pub use error::{ConfigError, CoreError, FocusmateError, Result, ValidationError};
pub use hooks::{run_end_hooks, run_start_hooks};
pub use integrations::{FocusmateClient, Integrations, SlackClient, SystemIntegrations};
pub use storage::{Config, FileStore, MemoryStore, StateStore};
pub use timer::{
    run_daemon, DetachedJobs, JobControl, RemainingTime, TimerController, TimerPlan, TimerState,
    TimerStatus,
};
