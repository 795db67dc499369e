//! Start/end hook sequences.
//!
//! Each step runs only if its integration is enabled in the config, and a
//! failing step never stops the ones after it.

use tracing::{info, warn};

use crate::error::Result;
use crate::integrations::Integrations;
use crate::storage::Config;

fn log_failure(step: &str, result: Result<()>) {
    if let Err(e) = result {
        warn!("{step} hook failed: {e}");
    }
}

/// Notifications, focus mode, app kill, Slack status, start commands.
pub async fn run_start_hooks<I: Integrations + ?Sized>(
    config: &Config,
    integrations: &I,
    duration_min: u64,
) {
    let hooks = &config.integrations;
    info!("running start hooks for a {duration_min} minute timer");

    if hooks.notifications {
        log_failure("notification", integrations.notify_start(duration_min).await);
    }

    if hooks.focus_mode {
        log_failure("focus mode", integrations.enable_focus_mode().await);
    }

    if !hooks.apps.kill.is_empty() {
        log_failure("app kill", integrations.kill_apps(&hooks.apps.kill).await);
    }

    if !hooks.slack.workspaces.is_empty() {
        log_failure(
            "slack",
            integrations.set_focus_status(&hooks.slack.workspaces).await,
        );
    }

    if !hooks.commands.on_start.is_empty() {
        log_failure(
            "start commands",
            integrations.run_start_commands(&hooks.commands.on_start).await,
        );
    }
}

/// Focus mode off, app reopen, Slack clear, end commands, and the
/// completion notification last.
pub async fn run_end_hooks<I: Integrations + ?Sized>(config: &Config, integrations: &I) {
    let hooks = &config.integrations;
    info!("running end hooks");

    if hooks.focus_mode {
        log_failure("focus mode", integrations.disable_focus_mode().await);
    }

    if !hooks.apps.reopen.is_empty() {
        log_failure("app reopen", integrations.open_apps(&hooks.apps.reopen).await);
    }

    if !hooks.slack.workspaces.is_empty() {
        log_failure("slack", integrations.clear_status(&hooks.slack.workspaces).await);
    }

    if !hooks.commands.on_end.is_empty() {
        log_failure(
            "end commands",
            integrations.run_end_commands(&hooks.commands.on_end).await,
        );
    }

    if hooks.notifications {
        log_failure("notification", integrations.notify_end().await);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::error::{CoreError, Result};
    use crate::integrations::Integrations;
    use crate::storage::SlackWorkspace;

    /// Records every call; optionally fails the named ones.
    #[derive(Default)]
    pub struct Recorder {
        pub calls: Mutex<Vec<String>>,
        pub failing: Vec<&'static str>,
    }

    impl Recorder {
        pub fn failing(names: &[&'static str]) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                failing: names.to_vec(),
            }
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, name: &'static str, detail: String) -> Result<()> {
            self.calls.lock().unwrap().push(detail);
            if self.failing.contains(&name) {
                return Err(CoreError::integration(name, "boom"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl Integrations for Recorder {
        async fn notify_start(&self, duration_min: u64) -> Result<()> {
            self.record("notify_start", format!("notify_start({duration_min})"))
        }
        async fn notify_end(&self) -> Result<()> {
            self.record("notify_end", "notify_end".into())
        }
        async fn enable_focus_mode(&self) -> Result<()> {
            self.record("enable_focus_mode", "enable_focus_mode".into())
        }
        async fn disable_focus_mode(&self) -> Result<()> {
            self.record("disable_focus_mode", "disable_focus_mode".into())
        }
        async fn kill_apps(&self, apps: &[String]) -> Result<()> {
            self.record("kill_apps", format!("kill_apps({})", apps.join(",")))
        }
        async fn open_apps(&self, apps: &[String]) -> Result<()> {
            self.record("open_apps", format!("open_apps({})", apps.join(",")))
        }
        async fn set_focus_status(&self, ws: &[SlackWorkspace]) -> Result<()> {
            self.record("set_focus_status", format!("set_focus_status({})", ws.len()))
        }
        async fn clear_status(&self, ws: &[SlackWorkspace]) -> Result<()> {
            self.record("clear_status", format!("clear_status({})", ws.len()))
        }
        async fn run_start_commands(&self, c: &[String]) -> Result<()> {
            self.record("run_start_commands", format!("run_start_commands({})", c.join(";")))
        }
        async fn run_end_commands(&self, c: &[String]) -> Result<()> {
            self.record("run_end_commands", format!("run_end_commands({})", c.join(";")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;
    use crate::storage::{IntegrationsConfig, SlackWorkspace};

    fn everything_enabled() -> Config {
        let mut config = Config::default();
        config.integrations.apps.kill = vec!["Slack".into(), "Messages".into()];
        config.integrations.apps.reopen = vec!["Slack".into()];
        config.integrations.slack.workspaces = vec![SlackWorkspace {
            name: "test".into(),
            token: "token".into(),
            status_emoji: ":tomato:".into(),
            status_text: "Focusing".into(),
        }];
        config.integrations.commands.on_start = vec!["echo \"start\"".into()];
        config.integrations.commands.on_end = vec!["say \"done\"".into()];
        config
    }

    fn everything_disabled() -> Config {
        let mut config = Config::default();
        config.integrations = IntegrationsConfig {
            focus_mode: false,
            notifications: false,
            ..IntegrationsConfig::default()
        };
        config.integrations.apps.kill.clear();
        config.integrations.apps.reopen.clear();
        config
    }

    #[tokio::test]
    async fn start_hooks_run_all_enabled_in_order() {
        let rec = Recorder::default();
        run_start_hooks(&everything_enabled(), &rec, 25).await;
        assert_eq!(
            rec.calls(),
            vec![
                "notify_start(25)",
                "enable_focus_mode",
                "kill_apps(Slack,Messages)",
                "set_focus_status(1)",
                "run_start_commands(echo \"start\")",
            ]
        );
    }

    #[tokio::test]
    async fn start_hooks_skip_disabled() {
        let rec = Recorder::default();
        run_start_hooks(&everything_disabled(), &rec, 25).await;
        assert!(rec.calls().is_empty());
    }

    #[tokio::test]
    async fn start_hooks_pass_duration_to_notification() {
        let rec = Recorder::default();
        let mut config = everything_disabled();
        config.integrations.notifications = true;
        run_start_hooks(&config, &rec, 50).await;
        assert_eq!(rec.calls(), vec!["notify_start(50)"]);
    }

    #[tokio::test]
    async fn end_hooks_run_all_enabled_with_notification_last() {
        let rec = Recorder::default();
        run_end_hooks(&everything_enabled(), &rec).await;
        assert_eq!(
            rec.calls(),
            vec![
                "disable_focus_mode",
                "open_apps(Slack)",
                "clear_status(1)",
                "run_end_commands(say \"done\")",
                "notify_end",
            ]
        );
    }

    #[tokio::test]
    async fn end_hooks_skip_disabled() {
        let rec = Recorder::default();
        run_end_hooks(&everything_disabled(), &rec).await;
        assert!(rec.calls().is_empty());
    }

    #[tokio::test]
    async fn failing_hook_does_not_stop_the_rest() {
        let rec = Recorder::failing(&["enable_focus_mode", "set_focus_status"]);
        run_start_hooks(&everything_enabled(), &rec, 25).await;
        assert_eq!(rec.calls().len(), 5);
    }
}
