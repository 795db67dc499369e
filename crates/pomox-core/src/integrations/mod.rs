pub mod apps;
pub mod commands;
pub mod focus_mode;
pub mod focusmate;
pub mod notifications;
pub mod shell;
pub mod slack;
pub mod system;
pub mod traits;

pub use focusmate::{select_active_session, ActiveSession, FocusmateClient, FocusmateSession};
pub use slack::{Presence, SlackClient};
pub use system::SystemIntegrations;
pub use traits::Integrations;

use std::time::Duration;

use crate::error::{CoreError, Result};

/// Ceiling for any single HTTP call.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared client for Slack and Focusmate.
///
/// # Errors
/// Returns an error if the TLS backend cannot be initialised.
pub fn http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .user_agent(concat!("pomox/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| CoreError::integration_with_source("http", "failed to build HTTP client", e))
}
