//! Slack integration -- set user status + presence during focus sessions.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::error::{CoreError, Result};
use crate::storage::SlackWorkspace;

pub const SLACK_API_BASE: &str = "https://slack.com/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Away,
    Auto,
}

/// Slack Web API envelope: `{"ok": false, "error": "invalid_auth"}`.
#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

pub struct SlackClient {
    http: Client,
    base_url: String,
}

impl SlackClient {
    pub fn new(http: Client) -> Self {
        Self::with_base_url(http, SLACK_API_BASE)
    }

    pub fn with_base_url(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn post(&self, workspace: &SlackWorkspace, method: &str, body: serde_json::Value) -> Result<()> {
        let resp = self
            .http
            .post(format!("{}/{method}", self.base_url))
            .bearer_auth(&workspace.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| CoreError::integration_with_source("slack", format!("{method} request failed"), e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::integration(
                "slack",
                format!("Slack {method} error: HTTP {status}"),
            ));
        }

        let data: SlackResponse = resp
            .json()
            .await
            .map_err(|e| CoreError::integration_with_source("slack", format!("{method} returned malformed JSON"), e))?;
        if !data.ok {
            let err = data.error.unwrap_or_else(|| "unknown error".to_string());
            return Err(CoreError::integration("slack", err));
        }
        Ok(())
    }

    /// Set the Slack user profile status.
    pub async fn set_status(&self, workspace: &SlackWorkspace, emoji: &str, text: &str) -> Result<()> {
        let body = json!({
            "profile": {
                "status_emoji": emoji,
                "status_text": text,
            }
        });
        self.post(workspace, "users.profile.set", body).await
    }

    pub async fn set_presence(&self, workspace: &SlackWorkspace, presence: Presence) -> Result<()> {
        self.post(workspace, "users.setPresence", json!({ "presence": presence }))
            .await
    }

    /// Show each workspace's focus status and go away. Returns how many
    /// calls failed.
    pub async fn set_focus_status(&self, workspaces: &[SlackWorkspace]) -> usize {
        let mut failures = 0;
        for workspace in workspaces {
            info!("setting Slack focus status for {}", workspace.name);
            if let Err(e) = self
                .set_status(workspace, &workspace.status_emoji, &workspace.status_text)
                .await
            {
                warn!("Failed to set Slack status for {}: {e}", workspace.name);
                failures += 1;
            }
            if let Err(e) = self.set_presence(workspace, Presence::Away).await {
                warn!("Failed to set Slack presence for {}: {e}", workspace.name);
                failures += 1;
            }
        }
        failures
    }

    /// Clear each workspace's status and return to automatic presence.
    /// Returns how many calls failed.
    pub async fn clear_status(&self, workspaces: &[SlackWorkspace]) -> usize {
        let mut failures = 0;
        for workspace in workspaces {
            info!("clearing Slack status for {}", workspace.name);
            if let Err(e) = self.set_status(workspace, "", "").await {
                warn!("Failed to set Slack status for {}: {e}", workspace.name);
                failures += 1;
            }
            if let Err(e) = self.set_presence(workspace, Presence::Auto).await {
                warn!("Failed to set Slack presence for {}: {e}", workspace.name);
                failures += 1;
            }
        }
        failures
    }
}
