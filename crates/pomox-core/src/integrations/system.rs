//! Production [`Integrations`] backed by macOS tools and the Slack API.

use async_trait::async_trait;
use reqwest::Client;

use super::commands::{run_commands, COMMAND_TIMEOUT};
use super::slack::SlackClient;
use super::traits::Integrations;
use super::{apps, focus_mode, notifications};
use crate::error::{CoreError, Result};
use crate::storage::SlackWorkspace;

pub struct SystemIntegrations {
    slack: SlackClient,
}

impl SystemIntegrations {
    pub fn new(http: Client) -> Self {
        Self {
            slack: SlackClient::new(http),
        }
    }

    pub fn with_slack(slack: SlackClient) -> Self {
        Self { slack }
    }
}

fn partial_failure(service: &str, failures: usize, total: usize) -> Result<()> {
    if failures == 0 {
        Ok(())
    } else {
        Err(CoreError::integration(
            service,
            format!("{failures} of {total} calls failed"),
        ))
    }
}

#[async_trait]
impl Integrations for SystemIntegrations {
    async fn notify_start(&self, duration_min: u64) -> Result<()> {
        notifications::notify_start(duration_min).await
    }

    async fn notify_end(&self) -> Result<()> {
        notifications::notify_end().await
    }

    async fn enable_focus_mode(&self) -> Result<()> {
        focus_mode::enable_focus_mode().await
    }

    async fn disable_focus_mode(&self) -> Result<()> {
        focus_mode::disable_focus_mode().await
    }

    async fn kill_apps(&self, list: &[String]) -> Result<()> {
        apps::kill_apps(list).await;
        Ok(())
    }

    async fn open_apps(&self, list: &[String]) -> Result<()> {
        apps::open_apps(list).await;
        Ok(())
    }

    async fn set_focus_status(&self, workspaces: &[SlackWorkspace]) -> Result<()> {
        let failures = self.slack.set_focus_status(workspaces).await;
        partial_failure("slack", failures, workspaces.len() * 2)
    }

    async fn clear_status(&self, workspaces: &[SlackWorkspace]) -> Result<()> {
        let failures = self.slack.clear_status(workspaces).await;
        partial_failure("slack", failures, workspaces.len() * 2)
    }

    async fn run_start_commands(&self, commands: &[String]) -> Result<()> {
        let failures = run_commands(commands, COMMAND_TIMEOUT).await;
        partial_failure("commands", failures, commands.len())
    }

    async fn run_end_commands(&self, commands: &[String]) -> Result<()> {
        let failures = run_commands(commands, COMMAND_TIMEOUT).await;
        partial_failure("commands", failures, commands.len())
    }
}
